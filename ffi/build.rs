//! Generates `arith_ffi.h` into `OUT_DIR`.
//!
//! Header generation is best-effort: a failure is reported as a cargo
//! warning and never fails the build of the library itself.

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=src/types.rs");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    let (Ok(crate_dir), Ok(out_dir)) = (env::var("CARGO_MANIFEST_DIR"), env::var("OUT_DIR")) else {
        println!("cargo:warning=header generation skipped: cargo env vars missing");
        return;
    };
    let crate_dir = PathBuf::from(crate_dir);

    let config = match cbindgen::Config::from_file(crate_dir.join("cbindgen.toml")) {
        Ok(config) => config,
        Err(err) => {
            println!("cargo:warning=header generation skipped: {err}");
            return;
        }
    };

    let generated = cbindgen::Builder::new()
        .with_config(config)
        .with_src(crate_dir.join("src/lib.rs"))
        .generate();

    match generated {
        Ok(bindings) => {
            let _ = bindings.write_to_file(PathBuf::from(out_dir).join("arith_ffi.h"));
        }
        Err(err) => println!("cargo:warning=header generation skipped: {err}"),
    }
}
