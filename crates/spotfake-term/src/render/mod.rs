pub mod text;

use heapless::String;
use spotfake_core::render::Screen;

pub const FRAME_BYTES: usize = 4096;

pub type TextFrame = String<FRAME_BYTES>;

pub trait FrameRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut TextFrame);
}
