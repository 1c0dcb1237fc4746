//! Binary entrypoint for the browser-hosted emoji collection app.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Use `cargo dev` for local development or build `site_app` for wasm32 with the `csr` feature."
    );
}
