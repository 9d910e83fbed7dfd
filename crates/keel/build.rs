//! Turns cargo's target configuration into keel's platform facts.
//!
//! Emits:
//! - `keel_compiler = "msvc" | "gcc"` when a compiler collaborator exists
//! - `keel_manual_int` when the `manual-int` feature is on
//! - `keel_register_exceeds_pointer` when registers are wider than pointers
//! - `KEEL_TARGET_NAME` / `KEEL_COMPILER_NAME` for diagnostics
//! - `$OUT_DIR/host_facts.rs` with the detected facts as constants

use std::env;
use std::fs;
use std::path::PathBuf;

use keel_facts::detect::{from_cargo_cfg, CARGO_CFG_KEYS, COMPILER_OVERRIDE_VAR};
use keel_facts::CompilerFamily;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={COMPILER_OVERRIDE_VAR}");
    for key in CARGO_CFG_KEYS {
        println!("cargo:rerun-if-env-changed={key}");
    }
    println!("cargo:rustc-check-cfg=cfg(keel_compiler, values(\"msvc\", \"gcc\"))");
    println!("cargo:rustc-check-cfg=cfg(keel_manual_int)");
    println!("cargo:rustc-check-cfg=cfg(keel_register_exceeds_pointer)");

    let has_stdint = env::var_os("CARGO_FEATURE_MANUAL_INT").is_none();
    let facts = match from_cargo_cfg(|key| env::var(key).ok(), has_stdint) {
        Ok(facts) => facts,
        Err(e) => panic!("keel: platform fact detection failed: {e}"),
    };

    match &facts.compiler {
        CompilerFamily::Msvc => println!("cargo:rustc-cfg=keel_compiler=\"msvc\""),
        CompilerFamily::Gcc => println!("cargo:rustc-cfg=keel_compiler=\"gcc\""),
        CompilerFamily::Unknown(name) => {
            println!("cargo:warning=keel: no compiler collaborator for '{name}'")
        }
    }
    if !facts.has_stdint {
        println!("cargo:rustc-cfg=keel_manual_int");
    }
    if facts.register_exceeds_pointer() {
        println!("cargo:rustc-cfg=keel_register_exceeds_pointer");
    }
    println!("cargo:rustc-env=KEEL_TARGET_NAME={}", facts.name);
    println!("cargo:rustc-env=KEEL_COMPILER_NAME={}", facts.compiler);

    let generated = format!(
        "// @generated by keel's build script.\n\
         pub const NAME: &str = {:?};\n\
         pub const TARGET: ::keel_facts::TargetFamily = ::keel_facts::TargetFamily::{:?};\n\
         pub const COMPILER: &str = {:?};\n\
         pub const POINTER_SIZE: u32 = {};\n\
         pub const REGISTER_BITS: u32 = {};\n\
         pub const HAS_STDINT: bool = {};\n",
        facts.name,
        facts.target,
        facts.compiler.as_str(),
        facts.pointer_size,
        facts.register_bits,
        facts.has_stdint,
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    if let Err(e) = fs::write(out_dir.join("host_facts.rs"), generated) {
        panic!("keel: cannot write host_facts.rs: {e}");
    }
}
