use thiserror::Error;

///
/// Errors that can be returned by the fallible pixmap operations
///
/// Drawing operations never fail: bad coordinates and degenerate shapes just leave the buffer unchanged. Only operations
/// that replace or produce a whole buffer report errors.
///
#[derive(Error, Debug)]
pub enum PixmapError {
    /// A rounded rectangle was requested with a radius less than 0
    #[error("rounded rectangle radius must not be negative (was {0})")]
    NegativeRadius(i32),

    /// A replacement buffer did not have the size required by the pixmap dimensions
    #[error("pixel data has length {actual}, but {expected} values are required")]
    DataLength { expected: usize, actual: usize },

    /// The pixmap has been closed and its pixels have been released
    #[error("the pixmap has been closed")]
    Closed,

    /// The PNG encoder failed to write the image
    #[cfg(feature="render_png")]
    #[error("could not encode PNG data: {0}")]
    Png(#[from] png::EncodingError),
}

impl PartialEq for PixmapError {
    fn eq(&self, other: &PixmapError) -> bool {
        use PixmapError::*;

        match (self, other) {
            (NegativeRadius(a), NegativeRadius(b))                                                              => a == b,
            (DataLength { expected: e1, actual: a1 }, DataLength { expected: e2, actual: a2 })                  => e1 == e2 && a1 == a2,
            (Closed, Closed)                                                                                    => true,
            _                                                                                                   => false,
        }
    }
}
