//! Locates and links against the system `libmarpa` Earley-parsing kernel.
//!
//! This crate never vendors or builds libmarpa itself. If `pkg-config`
//! cannot find it, we fall back to a plain `-lmarpa` and let the final
//! link step fail with the platform linker's own error if the library
//! truly isn't present.

fn main() {
  println!("cargo:rerun-if-env-changed=MARPA_LIB_DIR");
  println!("cargo:rerun-if-env-changed=MARPA_NO_PKG_CONFIG");

  if let Ok(dir) = std::env::var("MARPA_LIB_DIR") {
    println!("cargo:rustc-link-search=native={dir}");
    println!("cargo:rustc-link-lib=dylib=marpa");
    return;
  }

  if std::env::var("MARPA_NO_PKG_CONFIG").is_err() {
    if pkg_config::Config::new().atleast_version("8.0").probe("libmarpa").is_ok() {
      return;
    }
  }

  // Last resort: assume the library is discoverable via the default linker
  // search path (e.g. installed under /usr/lib via a distro package).
  println!("cargo:rustc-link-lib=dylib=marpa");
}
