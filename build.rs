fn main() {
    // Rebuild when the bundled page or app config changes so `tauri dev` picks them up.
    println!("cargo:rerun-if-changed=ui/index.html");
    println!("cargo:rerun-if-changed=icons/icon.png");
    println!("cargo:rerun-if-changed=icons/icon.ico");
    println!("cargo:rerun-if-changed=tauri.conf.json");
    tauri_build::build()
}
