use anyhow::Result;
use freqmerge::{open_records, write_records};
use std::fs;
use tempfile::tempdir;

fn collect_records(path: &std::path::Path) -> Result<Vec<(String, u64)>> {
    open_records(path)?.collect()
}

#[test]
fn reads_plain_snapshot() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("snap.csv");
    fs::write(&path, "hello,3\nworld,5\n")?;

    let records = collect_records(&path)?;
    assert_eq!(
        records,
        vec![("hello".to_string(), 3), ("world".to_string(), 5)]
    );
    Ok(())
}

#[test]
fn empty_snapshot_yields_no_records() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("empty.csv");
    fs::write(&path, "")?;

    assert!(collect_records(&path)?.is_empty());
    Ok(())
}

#[test]
fn splits_on_first_comma_only() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("snap.csv");
    // the count field must be everything after the first comma
    fs::write(&path, "a,b,c\n")?;

    let err = collect_records(&path).unwrap_err();
    assert!(err.to_string().contains("a,b,c"), "got: {err:#}");
    Ok(())
}

#[test]
fn line_without_comma_is_fatal() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("snap.csv");
    fs::write(&path, "hello,3\njunkline\n")?;

    let err = collect_records(&path).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("junkline"), "got: {msg}");
    assert!(msg.contains("line 2"), "got: {msg}");
    Ok(())
}

#[test]
fn non_numeric_count_is_fatal() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("snap.csv");
    fs::write(&path, "word,many\n")?;

    let err = collect_records(&path).unwrap_err();
    assert!(err.to_string().contains("word,many"), "got: {err:#}");
    Ok(())
}

#[test]
fn negative_count_is_fatal() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("snap.csv");
    fs::write(&path, "word,-3\n")?;

    assert!(collect_records(&path).is_err());
    Ok(())
}

#[test]
fn surrounding_whitespace_in_count_is_fatal() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("snap.csv");
    fs::write(&path, "word, 3\n")?;

    assert!(collect_records(&path).is_err());
    Ok(())
}

#[test]
fn empty_word_field_is_allowed() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("snap.csv");
    fs::write(&path, ",5\n")?;

    assert_eq!(collect_records(&path)?, vec![(String::new(), 5)]);
    Ok(())
}

#[test]
fn missing_file_fails_at_open() {
    let err = open_records("no/such/snapshot.csv.gz").err().unwrap();
    assert!(err.to_string().contains("open"), "got: {err:#}");
}

#[test]
fn write_then_read_round_trip() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("out.csv");

    let written = write_records(&path, [("alpha", 1u64), ("beta", 22)])?;
    assert_eq!(written, 2);
    assert_eq!(
        collect_records(&path)?,
        vec![("alpha".to_string(), 1), ("beta".to_string(), 22)]
    );
    Ok(())
}

#[test]
fn write_creates_parent_directories() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("nested/deeper/out.csv");

    write_records(&path, [("word", 7u64)])?;
    assert_eq!(collect_records(&path)?, vec![("word".to_string(), 7)]);
    Ok(())
}

#[cfg(feature = "compression-gzip")]
mod gzip {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    #[test]
    fn gzip_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("snap.csv.gz");

        write_records(&path, [("hello", 3u64), ("world", 5)])?;

        // the file on disk must actually be gzip
        let raw = fs::read(&path)?;
        assert!(raw.starts_with(&[0x1f, 0x8b]));

        assert_eq!(
            collect_records(&path)?,
            vec![("hello".to_string(), 3), ("world".to_string(), 5)]
        );
        Ok(())
    }

    #[test]
    fn detects_gzip_by_magic_bytes_without_extension() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("snapshot.dat"); // intentionally wrong extension

        let f = fs::File::create(&path)?;
        let mut enc = GzEncoder::new(f, Compression::default());
        enc.write_all(b"hello,3\n")?;
        enc.finish()?;

        assert_eq!(collect_records(&path)?, vec![("hello".to_string(), 3)]);
        Ok(())
    }

    #[test]
    fn truncated_gzip_stream_is_fatal() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("snap.csv.gz");
        // gzip magic followed by garbage
        fs::write(&path, [0x1f, 0x8b, 0x00, 0x01, 0x02])?;

        assert!(collect_records(&path).is_err());
        Ok(())
    }
}
