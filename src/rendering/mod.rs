mod png_io;

pub use png_io::{decode_rgb_png, encode_rgb_png, load_rgb_png, save_rgb_png};
