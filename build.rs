fn main() {
    println!("cargo:rerun-if-env-changed=OPENBLAS_LIB_DIR");

    // Without `openblas`, the slange_/dlange_/clange_/zlange_ symbols in
    // `ffi.rs` must come from whatever LAPACK the final binary links.
    #[cfg(feature = "openblas")]
    {
        // libopenblas exports the Fortran xLANGE symbols with the trailing
        // underscore that `ffi.rs` declares.
        if let Ok(lib_dir) = std::env::var("OPENBLAS_LIB_DIR") {
            println!("cargo:rustc-link-search=native={}", lib_dir);
        } else if cfg!(target_os = "macos") {
            // Accelerate uses the f2c return convention for slange_, so
            // link a keg-only Homebrew OpenBLAS instead.
            println!("cargo:rustc-link-search=native=/opt/homebrew/opt/openblas/lib");
            println!("cargo:rustc-link-search=native=/usr/local/opt/openblas/lib");
        }
        println!("cargo:rustc-link-lib=openblas");
    }
}
