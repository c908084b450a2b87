use std::{fs::File, io::Read, path::PathBuf};

pub fn file_to_packet(fname: &str) -> Vec<u8> {
    let mut program_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    program_path.push("tests");
    program_path.push("packet_examples");
    program_path.push(fname);

    let mut file = File::open(program_path).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    let content = content.trim();

    // Two hex digits per byte, no separators.
    (0..content.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&content[i..i + 2], 16).unwrap())
        .collect()
}
