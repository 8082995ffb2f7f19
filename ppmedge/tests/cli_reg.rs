//! Command-line regression test
//!
//! Runs the `ppmedge` binary in a scratch directory and checks its output
//! files, the elapsed-time line, and exit status.

use ppmedge_test::{RegParams, gradient_image, noise_image, scratch_dir, write_bytes, write_fixture};
use std::process::Command;

fn ppmedge() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ppmedge"))
}

#[test]
fn cli_reg() {
    let mut rp = RegParams::new("cli");
    let dir = scratch_dir().expect("scratch dir");

    let a = write_fixture(dir.path(), "a.ppm", &gradient_image(12, 9).expect("a")).expect("a");
    let b = write_fixture(dir.path(), "b.ppm", &noise_image(20, 3, 5).expect("b")).expect("b");

    // --- Test 1: success writes laplacian<i>.ppm into the working directory ---
    let out = ppmedge()
        .current_dir(dir.path())
        .arg(&a)
        .arg(&b)
        .output()
        .expect("run ppmedge");
    rp.check(out.status.success(), "exit status 0");
    let stdout = String::from_utf8_lossy(&out.stdout);
    let line = stdout.trim_end();
    rp.check(line.starts_with("Total elapsed time: "), "summary line");
    rp.check(line.ends_with(" s"), "summary unit");
    let secs = line
        .trim_start_matches("Total elapsed time: ")
        .trim_end_matches(" s");
    rp.check(
        secs.split('.').nth(1).map(str::len) == Some(4),
        "four decimals",
    );
    rp.check(dir.path().join("laplacian1.ppm").exists(), "first output");
    rp.check(dir.path().join("laplacian2.ppm").exists(), "second output");

    // --- Test 2: no inputs is a usage error ---
    let out = ppmedge().current_dir(dir.path()).output().expect("run ppmedge");
    rp.check(!out.status.success(), "usage error exits non-zero");
    rp.check(
        String::from_utf8_lossy(&out.stderr).contains("Usage"),
        "usage message printed",
    );

    // --- Test 3: a failing image gives a non-zero exit but others are written ---
    let sub = dir.path().join("partial");
    std::fs::create_dir(&sub).expect("subdir");
    let bad = write_bytes(dir.path(), "bad.ppm", b"P3\n1 1\n255\n0 0 0\n").expect("bad");
    let out = ppmedge()
        .current_dir(&sub)
        .args(["-j", "2"])
        .arg(&bad)
        .arg(&a)
        .output()
        .expect("run ppmedge");
    rp.check(!out.status.success(), "failure exits non-zero");
    rp.check(!sub.join("laplacian1.ppm").exists(), "bad input has no output");
    rp.check(sub.join("laplacian2.ppm").exists(), "sibling still written");
    rp.check(
        String::from_utf8_lossy(&out.stdout).starts_with("Total elapsed time: "),
        "summary still printed",
    );

    // --- Test 4: zero workers is rejected by the argument parser ---
    let out = ppmedge()
        .current_dir(&sub)
        .args(["-j", "0"])
        .arg(&a)
        .output()
        .expect("run ppmedge");
    rp.check(!out.status.success(), "zero workers rejected");

    assert!(rp.cleanup(), "cli regression test failed");
}
