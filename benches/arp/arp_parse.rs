use arpkt::arp::*;
use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use smoltcp::wire::{ArpPacket as SmolArpPacket, ArpRepr};

// An arp reply padded to the Ethernet minimum payload.
static ARP_BYTES: [u8; 46] = [
    0x00, 0x01, 0x08, 0x00, 0x06, 0x04, 0x00, 0x02, 0x30, 0x46, 0x9a, 0x23, 0xfb, 0xfa, 0x0a, 0x00,
    0x00, 0x8a, 0x6c, 0xf0, 0x49, 0xb2, 0xde, 0x6e, 0x0a, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

fn view_parse(buf: &[u8]) {
    let view = PacketView::parse(buf).unwrap();
    assert!(view.operation() == Operation::REPLY);
    assert!(view.sender_protocol_addr() == &ARP_BYTES[14..18]);
    assert!(view.target_hardware_addr() == &ARP_BYTES[18..24]);
}

fn owned_parse(buf: &[u8]) {
    let pkt = Packet::deserialize(buf).unwrap();
    assert!(pkt.is_reply());
    assert!(pkt.hardware_addr_length == 6);
}

fn buf_decode(mut buf: Bytes) {
    let pkt = Packet::decode(&mut buf).unwrap();
    assert!(pkt.ip_length == 4);
    assert!(buf.len() == 18);
}

fn smol_parse(buf: &[u8]) {
    let pkt = SmolArpPacket::new_checked(buf).unwrap();
    let repr = ArpRepr::parse(&pkt).unwrap();
    assert!(repr.buffer_len() == ARP_ETHER_IPV4_LEN);
}

pub fn b1(c: &mut Criterion) {
    c.bench_function("arp_view_parse", |b| {
        b.iter(|| {
            view_parse(black_box(&ARP_BYTES[..]));
        })
    });
}

pub fn b2(c: &mut Criterion) {
    c.bench_function("arp_owned_parse", |b| {
        b.iter(|| {
            owned_parse(black_box(&ARP_BYTES[..]));
        })
    });
}

pub fn b3(c: &mut Criterion) {
    let bytes = Bytes::from_static(&ARP_BYTES[..]);
    c.bench_function("arp_buf_decode", |b| {
        b.iter(|| {
            buf_decode(black_box(bytes.clone()));
        })
    });
}

pub fn b4(c: &mut Criterion) {
    c.bench_function("smol_arp_parse", |b| {
        b.iter(|| {
            smol_parse(black_box(&ARP_BYTES[..]));
        })
    });
}

criterion_group!(benches, b1, b2, b3, b4);
criterion_main!(benches);
