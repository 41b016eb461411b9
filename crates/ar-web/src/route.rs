// Viewer pages live at `/ar/<model key>`; the QR codes point there.
pub const VIEWER_PATH_PREFIX: &str = "/ar/";

#[inline]
pub fn model_key_from_path(path: &str) -> Option<&str> {
    let key = path
        .strip_prefix(VIEWER_PATH_PREFIX)?
        .trim_end_matches('/');
    (!key.is_empty() && !key.contains('/')).then_some(key)
}
