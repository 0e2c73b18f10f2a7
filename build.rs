// SPDX-License-Identifier: MPL-2.0
//! Build script for platform-specific resources.
//!
//! On Windows, this embeds the booklet icon into the executable
//! when one is present under `assets/branding/`.

fn main() {
    println!("cargo:rerun-if-changed=assets/branding/welcome_booklet.ico");

    #[cfg(target_os = "windows")]
    {
        let icon = std::path::Path::new("assets/branding/welcome_booklet.ico");
        if icon.exists() {
            let mut res = winresource::WindowsResource::new();
            res.set_icon("assets/branding/welcome_booklet.ico");
            res.compile().expect("Failed to compile Windows resources");
        }
    }
}
