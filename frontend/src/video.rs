use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};

use crate::overlay;

pub const LCD_WIDTH: u32 = gb_core::video::LCD_WIDTH as u32;
pub const LCD_HEIGHT: u32 = gb_core::video::LCD_HEIGHT as u32;

pub struct Video {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
    width: u32,
    height: u32,
    scratch: Vec<u8>,
}

impl Video {
    /// Create an SDL window and renderer for the given native resolution.
    pub fn new(
        sdl_video: &sdl2::VideoSubsystem,
        title: &str,
        native_width: u32,
        native_height: u32,
        scale: u32,
    ) -> Self {
        let window = sdl_video
            .window(title, native_width * scale, native_height * scale)
            .position_centered()
            .build()
            .expect("Failed to create window");

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .expect("Failed to create canvas");

        let texture_creator = canvas.texture_creator();

        Self {
            canvas,
            texture_creator,
            width: native_width,
            height: native_height,
            scratch: vec![0u8; (native_width * native_height * 3) as usize],
        }
    }

    /// Upload an RGB24 framebuffer to the texture and present it.
    pub fn present(&mut self, framebuffer: &[u8]) {
        self.upload_and_present(framebuffer);
    }

    /// Like `present`, but first burns an FPS readout into the top-left
    /// corner of a scratch copy of the framebuffer.
    pub fn present_with_overlay(&mut self, framebuffer: &[u8], fps_text: String) {
        self.scratch.copy_from_slice(framebuffer);
        overlay::draw_fps(&mut self.scratch, self.width as usize, &fps_text);
        let scratch = std::mem::take(&mut self.scratch);
        self.upload_and_present(&scratch);
        self.scratch = scratch;
    }

    fn upload_and_present(&mut self, framebuffer: &[u8]) {
        let mut texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::RGB24, self.width, self.height)
            .expect("Failed to create texture");

        texture
            .update(None, framebuffer, (self.width * 3) as usize)
            .expect("Failed to update texture");

        self.canvas.clear();
        self.canvas
            .copy(&texture, None, None)
            .expect("Failed to copy texture");
        self.canvas.present();
    }
}
