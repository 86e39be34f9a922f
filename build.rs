#![allow(clippy::style)]

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_zero_numeral(&outdir_path, "zero_numeral.rs")?;
    emit_property_test_cfg();
    Ok(())
}

/// Create zero_numeral.rs, containing definition of constant ZERO_NUMERAL
fn write_zero_numeral(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{
    let zero_numeral = env::var("RUST_BIGRADIX_ZERO_NUMERAL")
        .unwrap_or_else(|_| String::from("0"));

    let zero_numeral_rs_path = outdir_path.join(filename);

    let contents = format!("const ZERO_NUMERAL: &str = {:?};", zero_numeral);

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&zero_numeral_rs_path) {
        Ok(existing_contents) if existing_contents == contents => {},
        _ => {
            let mut zero_numeral_rs = File::create(&zero_numeral_rs_path)
                .expect("Could not create zero_numeral.rs");
            write!(zero_numeral_rs, "{contents}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", zero_numeral_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_BIGRADIX_ZERO_NUMERAL");

    Ok(())
}

fn emit_property_test_cfg() {
    println!("cargo:rustc-check-cfg=cfg(property_tests)");
    if env::var_os("CARGO_FEATURE_PROPERTY_TESTS").is_some() {
        println!("cargo:rustc-cfg=property_tests");
    }
}
