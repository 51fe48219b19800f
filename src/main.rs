//! Font Preview CLI (for testing purposes only)
//! The main interface is through WASM bindings.

fn main() {
    println!("Font Preview Core");
    println!("=================");
    println!();
    println!("This is a library crate. To use it:");
    println!();
    println!("  1. Build WASM: wasm-pack build --target web --out-dir web/pkg");
    println!("  2. Serve the page: cd web && python3 -m http.server 8080");
    println!("  3. Edit web/fonts.json to change the font catalog");
    println!();
    println!("For testing the core library:");
    println!("  cargo test");
}
