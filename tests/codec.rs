//! Integration tests for the column codec.
//!
//! These tests exercise the public API the way a table reader or writer uses it: columns are
//! declared, resolved, and then asked to move values through slice-backed and `std::io`
//! cursors.

use std::io::Cursor;

use cilcolumn::prelude::*;

const WIDTHS: [ColumnWidth; 3] = [ColumnWidth::Byte, ColumnWidth::Word, ColumnWidth::DWord];

fn resolved(width: ColumnWidth) -> ColumnInfo {
    ColumnInfo::new("Value", ColumnSize::UInt32).resolved(0, width)
}

fn write_then_read(column: &ColumnInfo, value: u32) -> (Vec<u8>, u32) {
    let mut sink = Vec::new();
    column.write(&mut sink, value).unwrap();

    let mut parser = Parser::new(&sink);
    let read = column.read(&mut parser).unwrap();
    assert_eq!(parser.pos(), sink.len());

    (sink, read)
}

#[test]
fn scenario_byte() {
    let (bytes, value) = write_then_read(&resolved(ColumnWidth::Byte), 0x7F);
    assert_eq!(bytes, [0x7F]);
    assert_eq!(value, 0x7F);
}

#[test]
fn scenario_word() {
    let (bytes, value) = write_then_read(&resolved(ColumnWidth::Word), 0x1234);
    assert_eq!(bytes, [0x34, 0x12]);
    assert_eq!(value, 0x1234);
}

#[test]
fn scenario_dword() {
    let (bytes, value) = write_then_read(&resolved(ColumnWidth::DWord), 0xDEAD_BEEF);
    assert_eq!(bytes, [0xEF, 0xBE, 0xAD, 0xDE]);
    assert_eq!(value, 0xDEAD_BEEF);
}

#[test]
fn scenario_word_truncation() {
    let (bytes, value) = write_then_read(&resolved(ColumnWidth::Word), 0x1_0001);
    assert_eq!(bytes, [0x01, 0x00]);
    assert_eq!(value, 1);
}

#[test]
fn scenario_unresolved() {
    let column = ColumnInfo::new("Value", ColumnSize::UInt32);
    let data = [0u8; 4];

    assert!(matches!(
        column.read(&mut Parser::new(&data)),
        Err(Error::InvalidColumnSize { .. })
    ));
    assert!(matches!(
        column.write(&mut Vec::new(), 0),
        Err(Error::InvalidColumnSize { .. })
    ));
}

#[test]
fn representable_values_survive() {
    let samples = [0u32, 1, 0x7F, 0x80, 0xFF, 0x100, 0x7FFF, 0xFFFF, 0x1_0000, u32::MAX];

    for width in WIDTHS {
        let column = resolved(width);
        for value in samples.into_iter().filter(|value| width.fits(*value)) {
            let (bytes, read) = write_then_read(&column, value);
            assert_eq!(read, value, "width {width}, value {value:#x}");
            assert_eq!(bytes.len(), usize::from(width));
        }
    }
}

#[test]
fn oversized_values_keep_low_bytes() {
    let byte = resolved(ColumnWidth::Byte);
    for value in [0x100u32, 0x1FF, 0xABCD, 0xDEAD_BEEF] {
        assert_eq!(write_then_read(&byte, value).1, value & 0xFF);
    }

    let word = resolved(ColumnWidth::Word);
    for value in [0x1_0000u32, 0x1_2345, 0xDEAD_BEEF] {
        assert_eq!(write_then_read(&word, value).1, value & 0xFFFF);
    }
}

#[test]
fn invalid_widths_fail_both_ways() {
    for width in [0u8, 3, 5, 255] {
        let mut column = ColumnInfo::new("Value", ColumnSize::UInt32);
        assert!(column.set_width(width).is_err());

        let data = [0u8; 8];
        let mut parser = Parser::new(&data);
        assert!(
            matches!(column.read(&mut parser), Err(Error::InvalidColumnSize { .. })),
            "read with width {width}"
        );
        assert_eq!(parser.pos(), 0);

        let mut sink = Vec::new();
        assert!(
            matches!(column.write(&mut sink, 1), Err(Error::InvalidColumnSize { .. })),
            "write with width {width}"
        );
        assert!(sink.is_empty());
    }
}

#[test]
fn cursor_advances_by_width() {
    let data = [0x11u8; 16];

    for width in WIDTHS {
        let column = resolved(width);

        let mut parser = Parser::new(&data);
        parser.advance_by(3).unwrap();
        column.read(&mut parser).unwrap();
        assert_eq!(parser.pos(), 3 + usize::from(width));

        let mut buffer = [0u8; 16];
        let mut writer = Writer::new(&mut buffer);
        writer.seek(5).unwrap();
        column.write(&mut writer, 0x0102_0304).unwrap();
        assert_eq!(writer.pos(), 5 + usize::from(width));
    }
}

#[test]
fn strict_narrowing() {
    let column = resolved(ColumnWidth::Word);
    let mut buffer = [0u8; 2];
    let mut writer = Writer::new(&mut buffer);

    assert!(matches!(
        column.write_with(&mut writer, 0x1_0000, Narrowing::Strict),
        Err(Error::ValueOverflow { value: 0x1_0000, .. })
    ));
    assert_eq!(writer.pos(), 0);

    column
        .write_with(&mut writer, 0xFFFF, Narrowing::Strict)
        .unwrap();
    assert_eq!(writer.pos(), 2);
    assert_eq!(buffer, [0xFF, 0xFF]);
}

#[test]
fn io_adapters() {
    let columns = [
        ColumnInfo::new("Kind", ColumnSize::Byte).resolved(0, ColumnWidth::Byte),
        ColumnInfo::new("Flags", ColumnSize::UInt16).resolved(1, ColumnWidth::Word),
        ColumnInfo::new("Rva", ColumnSize::UInt32).resolved(3, ColumnWidth::DWord),
    ];
    let values = [0x0Au32, 0x0102, 0x2050];

    let mut sink = IoSink::new(Cursor::new(Vec::new()));
    for (column, value) in columns.iter().zip(values) {
        column.write(&mut sink, value).unwrap();
    }
    let bytes = sink.into_inner().into_inner();
    assert_eq!(bytes, [0x0A, 0x02, 0x01, 0x50, 0x20, 0x00, 0x00]);

    let mut source = IoSource::new(Cursor::new(bytes));
    for (column, value) in columns.iter().zip(values) {
        assert_eq!(column.read(&mut source).unwrap(), value);
    }
}

#[test]
fn io_errors_pass_through() {
    let column = resolved(ColumnWidth::DWord);

    let mut source = IoSource::new(Cursor::new(vec![0x01, 0x02]));
    assert!(matches!(column.read(&mut source), Err(Error::FileError(_))));

    let data = [0x01, 0x02];
    assert!(matches!(
        column.read(&mut Parser::new(&data)),
        Err(Error::OutOfBounds)
    ));
}

#[test]
fn dyn_cursors() {
    let column = resolved(ColumnWidth::Word);

    let data = [0x34, 0x12];
    let mut parser = Parser::new(&data);
    let source: &mut dyn ByteSource = &mut parser;
    assert_eq!(column.read(source).unwrap(), 0x1234);

    let mut buffer = Vec::new();
    let sink: &mut dyn ByteSink = &mut buffer;
    column.write(sink, 0x1234).unwrap();
    assert_eq!(buffer, [0x34, 0x12]);
}
