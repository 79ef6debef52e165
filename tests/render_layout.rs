use hxd::{DumpConfig, dump_to_writer};
use std::io::Cursor;

fn render(data: &[u8], chunk_size: usize, show_ascii: bool, offset: u64, limit: u64) -> Vec<u8> {
    let config = DumpConfig {
        file_path: "mem.bin".into(),
        chunk_size,
        show_ascii,
        offset,
        limit,
    };
    let window = config.resolve_window(data.len() as u64).expect("bad window");
    let mut out = Vec::new();
    dump_to_writer(Cursor::new(data.to_vec()), window, &config, &mut out).expect("dump failed");
    out
}

fn render_str(data: &[u8], chunk_size: usize, show_ascii: bool, offset: u64, limit: u64) -> String {
    String::from_utf8(render(data, chunk_size, show_ascii, offset, limit)).expect("non-utf8 output")
}

#[test]
fn twenty_byte_file_renders_two_rows() {
    let data: Vec<u8> = (0..20).collect();
    let out = render_str(&data, 16, true, 0, 0);
    let lines: Vec<&str> = out.lines().collect();

    // banner, blank, header, rule, two rows, trailing blank
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "Hexdump for <mem.bin>:");
    assert_eq!(lines[2], "");

    let mut header = " ".repeat(11);
    for i in 0..16 {
        header.push_str(&format!("{i:02X} "));
    }
    assert_eq!(lines[3], header);

    assert_eq!(
        lines[5],
        "00000000 | 00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f     |   ................"
    );
    // short final row: 4 bytes, then 36 spaces of padding before the panel
    assert_eq!(
        lines[6],
        format!("00000010 | 10 11 12 13 {}    |   ....", " ".repeat(36))
    );
    assert_eq!(lines[7], "");
}

#[test]
fn header_has_one_column_per_byte() {
    for chunk_size in [1usize, 8, 16, 32] {
        let data = vec![0xAAu8; 4];
        let out = render_str(&data, chunk_size, true, 0, 0);
        let header = out.lines().nth(3).unwrap();
        assert_eq!(header.split_whitespace().count(), chunk_size);
    }
}

#[test]
fn rule_geometry_with_ascii_panel() {
    for chunk_size in [1usize, 8, 16] {
        let data = vec![0u8; 4];
        let out = render_str(&data, chunk_size, true, 0, 0);
        let rule = out.lines().nth(4).unwrap();

        assert_eq!(rule.len(), 16 + 4 * chunk_size);
        let junction = 13 + 3 * chunk_size;
        for (i, c) in rule.char_indices() {
            if i == junction {
                assert_eq!(c, '+');
            } else {
                assert_eq!(c, '-');
            }
        }
    }
}

#[test]
fn rule_geometry_without_ascii_panel() {
    let data = vec![0u8; 4];
    let out = render_str(&data, 16, false, 0, 0);
    let rule = out.lines().nth(4).unwrap();

    assert_eq!(rule.len(), 10 + 3 * 16);
    assert!(rule.chars().all(|c| c == '-'));

    // short rows are still padded, but there is no panel separator
    let row = out.lines().nth(5).unwrap();
    assert_eq!(row, format!("00000000 | 00 00 00 00 {}", " ".repeat(36)));
    assert_eq!(row.matches('|').count(), 1);
}

#[test]
fn control_bytes_render_as_dots() {
    let data = vec![0x00, 0x1F, 0x20, 0x41, 0x7E, 0x7F];
    let out = render_str(&data, 16, true, 0, 0);
    let row = out.lines().nth(5).unwrap();

    let panel = row.split("    |   ").nth(1).unwrap();
    assert_eq!(panel, ".. A~.");
}

#[test]
fn high_bytes_pass_through_raw() {
    let data = vec![0x41, 0xC3, 0xFF];
    let out = render(&data, 16, true, 0, 0);

    // the panel is the last thing before the row newline and the trailing
    // blank line, and carries the raw byte values
    assert!(out.ends_with(&[0x41, 0xC3, 0xFF, b'\n', b'\n']));
}

#[test]
fn offset_window_renders_single_row() {
    let data: Vec<u8> = (0..10).collect();
    let out = render_str(&data, 16, true, 5, 3);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 7); // one data row
    assert_eq!(
        lines[5],
        format!("00000005 | 05 06 07 {}    |   ...", " ".repeat(39))
    );
}

#[test]
fn addresses_advance_by_nominal_row_width() {
    let data: Vec<u8> = (0..20).collect();
    let out = render_str(&data, 4, true, 3, 10);
    let rows: Vec<&str> = out.lines().skip(5).filter(|l| !l.is_empty()).collect();

    assert_eq!(rows.len(), 3);
    assert!(rows[0].starts_with("00000003 | "));
    assert!(rows[1].starts_with("00000007 | "));
    // the last row reads only 2 bytes, but the address grid stays nominal
    assert!(rows[2].starts_with("0000000B | "));
    assert!(rows[2].contains("0b 0c "));
}

#[test]
fn hex_digits_round_trip_for_every_byte_value() {
    let data: Vec<u8> = (0..=255).collect();
    let out = render_str(&data, 16, false, 0, 0);

    let mut decoded = Vec::new();
    for row in out.lines().skip(5).filter(|l| !l.is_empty()) {
        let hex_area = row.split(" | ").nth(1).unwrap();
        for pair in hex_area.split_whitespace() {
            decoded.extend(hex::decode(pair).expect("bad hex digits"));
        }
    }
    assert_eq!(decoded, data);
}
