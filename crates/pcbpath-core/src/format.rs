/// Shortest round-tripping text for a path coordinate.
///
/// Integral values keep a trailing `.0` (`5.0`, `-4.0`), which is the form
/// the relative path writer has always produced and what downstream string
/// comparisons expect.
#[must_use]
pub fn fmt_coord(v: f64) -> String {
    let mut buf = ryu::Buffer::new();
    buf.format(v).to_string()
}
