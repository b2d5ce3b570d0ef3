//! Template tree compiled into the binary

use std::borrow::Cow;

use rust_embed::RustEmbed;

/// Embedded starter project
#[derive(RustEmbed)]
#[folder = "template/"]
struct BundledTemplate;

/// One embedded file, addressed by its `/`-separated path relative to the template root.
#[derive(Debug, Clone)]
pub struct BundledFile {
    pub path: String,
    pub data: Cow<'static, [u8]>,
}

/// Every file of the bundled template, sorted by path.
pub fn bundled_template_files() -> Vec<BundledFile> {
    let mut files: Vec<BundledFile> = BundledTemplate::iter()
        .filter_map(|path| {
            BundledTemplate::get(&path).map(|file| BundledFile {
                path: path.into_owned(),
                data: file.data,
            })
        })
        .collect();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}
