//! Links the TTC Toolkit (and PCANBasic on Windows) when the `ttctk`
//! feature is enabled. Set `TTCTK_LIB_DIR` to the SDK's library directory.

use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=TTCTK_LIB_DIR");

    if env::var_os("CARGO_FEATURE_TTCTK").is_none() {
        return;
    }

    if let Some(dir) = env::var_os("TTCTK_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir.to_string_lossy());
    }
    println!("cargo:rustc-link-lib=ttctk");

    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=PCANBasic");
    }
}
