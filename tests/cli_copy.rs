//! End-to-end tests of the `snapbin copy` subcommand through the binary.

use chrono::{Local, TimeZone};
use filetime::{FileTime, set_file_mtime};
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::SystemTime;
use tempfile::tempdir;

use snapbin::bucket_name;

fn pin_mtime(path: &Path, y: i32, m: u32, d: u32) -> String {
    let dt = Local.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
    set_file_mtime(path, FileTime::from_unix_time(dt.timestamp(), 0)).expect("set mtime");
    bucket_name(SystemTime::from(dt))
}

fn snapbin_copy(input: &Path, output: &Path) -> std::process::Output {
    let me = assert_cmd::cargo::cargo_bin!("snapbin");
    Command::new(me)
        .arg("copy")
        .arg("-i")
        .arg(input)
        .arg("-o")
        .arg(output)
        .arg("--log-level")
        .arg("quiet")
        .output()
        .expect("spawn binary")
}

#[test]
fn copy_sorts_files_into_date_buckets() {
    let td = tempdir().unwrap();
    let input = td.path().join("photos");
    let output = td.path().join("sorted");
    fs::create_dir_all(input.join("trip")).unwrap();

    fs::write(input.join("a.jpg"), b"a-bytes").unwrap();
    fs::write(input.join("trip").join("b.jpg"), b"b-bytes").unwrap();
    let bucket = pin_mtime(&input.join("a.jpg"), 2023, 5, 1);
    pin_mtime(&input.join("trip").join("b.jpg"), 2023, 5, 1);

    let out = snapbin_copy(&input, &output);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    assert_eq!(fs::read(output.join(&bucket).join("a.jpg")).unwrap(), b"a-bytes");
    assert_eq!(fs::read(output.join(&bucket).join("b.jpg")).unwrap(), b"b-bytes");

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("2 copied, 0 skipped"), "stdout: {stdout}");
}

#[test]
fn rerun_exits_zero_and_skips_everything() {
    let td = tempdir().unwrap();
    let input = td.path().join("photos");
    let output = td.path().join("sorted");
    fs::create_dir_all(&input).unwrap();

    fs::write(input.join("a.jpg"), b"a-bytes").unwrap();
    let bucket = pin_mtime(&input.join("a.jpg"), 2023, 5, 1);

    let first = snapbin_copy(&input, &output);
    assert!(first.status.success());

    let second = snapbin_copy(&input, &output);
    assert!(second.status.success(), "rerun must still exit 0");

    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("skipping"), "stdout: {stdout}");
    assert!(stdout.contains("0 copied, 1 skipped"), "stdout: {stdout}");
    assert_eq!(fs::read(output.join(&bucket).join("a.jpg")).unwrap(), b"a-bytes");
}

#[test]
fn missing_input_directory_exits_one() {
    let td = tempdir().unwrap();
    let input = td.path().join("no_such_dir");
    let output = td.path().join("sorted");

    let out = snapbin_copy(&input, &output);
    assert!(!out.status.success(), "expected nonzero exit");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("does not exist"), "stderr: {stderr}");
    assert!(!output.exists(), "destination must not be created on failure");
}

#[cfg(unix)]
#[test]
fn unreadable_input_exits_one_and_leaves_destination_untouched() {
    use std::os::unix::fs::PermissionsExt;

    let td = tempdir().unwrap();
    let input = td.path().join("photos");
    let output = td.path().join("sorted");
    fs::create_dir_all(&input).unwrap();
    fs::write(input.join("a.jpg"), b"a-bytes").unwrap();

    fs::set_permissions(&input, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&input).is_ok() {
        // Running as root: permission bits are not enforced, nothing to test.
        fs::set_permissions(&input, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let out = snapbin_copy(&input, &output);
    fs::set_permissions(&input, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(!out.status.success(), "expected nonzero exit");
    assert!(!output.exists(), "destination must not be modified");
}

#[test]
fn bad_subcommand_exits_nonzero() {
    let me = assert_cmd::cargo::cargo_bin!("snapbin");
    let out = Command::new(me)
        .arg("shuffle")
        .output()
        .expect("spawn binary");
    assert!(!out.status.success());
}
