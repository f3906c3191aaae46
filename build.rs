use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_DIR: &str = "assets/css";
const ENTRY: &str = "assets/css/main.css";
const OUTPUT: &str = "assets/dist/bundle.css";

fn main() {
    println!("cargo:rerun-if-changed={CSS_DIR}");

    let css = bundle_stylesheet(Path::new(ENTRY)).unwrap_or_else(|err| panic!("{ENTRY}: {err}"));
    write_if_changed(Path::new(OUTPUT), &css).unwrap_or_else(|err| panic!("{OUTPUT}: {err}"));
}

/// Inline every `@import` reachable from `entry` and minify the result.
fn bundle_stylesheet(entry: &Path) -> Result<String, String> {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());

    let mut sheet = bundler.bundle(entry).map_err(|err| err.to_string())?;
    sheet
        .minify(MinifyOptions::default())
        .map_err(|err| err.to_string())?;

    let printed = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|err| err.to_string())?;
    Ok(printed.code)
}

/// Leave the bundle untouched when nothing changed, so its mtime does not
/// retrigger the `asset!` pipeline.
fn write_if_changed(path: &Path, contents: &str) -> std::io::Result<()> {
    if fs::read_to_string(path).is_ok_and(|current| current == contents) {
        return Ok(());
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, contents)
}
