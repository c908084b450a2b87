use std::net::Ipv4Addr;

use arpkt::arp::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use smoltcp::wire::{
    ArpOperation, ArpPacket as SmolArpPacket, ArpRepr, EthernetAddress, Ipv4Address,
};

const SENDER_MAC: [u8; 6] = [0x6c, 0xf0, 0x49, 0xb2, 0xde, 0x6e];
const TARGET_MAC: [u8; 6] = [0x30, 0x46, 0x9a, 0x23, 0xfb, 0xfa];

fn packet_build(sha: &[u8], tha: &[u8]) -> Vec<u8> {
    let pkt = Packet::new(
        Operation::REQUEST,
        sha,
        Ipv4Addr::new(10, 0, 0, 1),
        tha,
        Ipv4Addr::new(10, 0, 0, 138),
    )
    .unwrap();
    pkt.serialize()
}

fn packet_emit(pkt: &Packet, buf: &mut [u8]) {
    pkt.emit(&mut &mut buf[..]);
}

fn smol_build(buf: &mut [u8]) {
    let repr = ArpRepr::EthernetIpv4 {
        operation: ArpOperation::Request,
        source_hardware_addr: EthernetAddress(SENDER_MAC),
        source_protocol_addr: Ipv4Address::new(10, 0, 0, 1),
        target_hardware_addr: EthernetAddress(TARGET_MAC),
        target_protocol_addr: Ipv4Address::new(10, 0, 0, 138),
    };
    repr.emit(&mut SmolArpPacket::new_unchecked(&mut buf[..]));
}

pub fn b1(c: &mut Criterion) {
    c.bench_function("arp_build_serialize", |b| {
        b.iter(|| {
            black_box(packet_build(
                black_box(&SENDER_MAC[..]),
                black_box(&TARGET_MAC[..]),
            ));
        })
    });
}

pub fn b2(c: &mut Criterion) {
    let pkt = Packet::deserialize(&packet_build(&SENDER_MAC[..], &TARGET_MAC[..])).unwrap();
    c.bench_function("arp_emit", |b| {
        let mut buf = [0; ARP_ETHER_IPV4_LEN];
        b.iter(|| {
            packet_emit(black_box(&pkt), black_box(&mut buf[..]));
        })
    });
}

pub fn b3(c: &mut Criterion) {
    c.bench_function("smol_arp_build", |b| {
        let mut buf = [0; ARP_ETHER_IPV4_LEN];
        b.iter(|| {
            smol_build(black_box(&mut buf[..]));
        })
    });
}

criterion_group!(benches, b1, b2, b3);
criterion_main!(benches);
