//! Renderer strategies that commit resolved values to sinks.
//!
//! Each function here has the shape `fn(&V, &mut Sink)` and is picked when a
//! motion is built, so the interpolation core never touches a sink directly.

pub mod css;
pub mod svg;
