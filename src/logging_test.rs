use super::*;

#[test]
fn test_log_writer_passes_bytes_to_sink() {
    let mut writer = LogWriter::new(Vec::new(), false);

    writer.write_all(b"[INFO] Saved\n").unwrap();
    writer.flush().unwrap();

    assert_eq!(writer.sink, b"[INFO] Saved\n");
}

#[test]
fn test_log_writer_reports_full_length_when_echoing() {
    let mut writer = LogWriter::new(Vec::new(), true);

    let written = writer.write(b"echoed line\n").unwrap();

    assert_eq!(written, 12);
    assert_eq!(writer.sink, b"echoed line\n");
}
