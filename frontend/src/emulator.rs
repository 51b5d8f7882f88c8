use std::time::Instant;

use gb_core::cpu::StepOutcome;
use gb_core::machine::GameBoy;
use sdl2::event::Event;
use sdl2::keyboard::Scancode;

use crate::overlay::FpsCounter;
use crate::video::{LCD_HEIGHT, LCD_WIDTH, Video};

/// Run `gb` against a window until the window is closed or the core
/// reaches a terminal state. No joypad, audio, or save-state handling —
/// those are out of scope (spec non-goals); Escape/window-close are the
/// only inputs recognized.
pub fn run(gb: &mut GameBoy, scale: u32, show_fps: bool) -> StepOutcome {
    let sdl_context = sdl2::init().expect("Failed to initialize SDL2");
    let sdl_video = sdl_context.video().expect("Failed to init SDL video");

    let mut video = Video::new(&sdl_video, "SM83 core", LCD_WIDTH, LCD_HEIGHT, scale);
    let mut event_pump = sdl_context.event_pump().expect("Failed to get event pump");
    let mut fps = FpsCounter::new();
    let mut last_frame = Instant::now();

    loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => return StepOutcome::Running { cycles: 0 },
                _ => {}
            }
        }

        let outcome = gb.run_frame();
        if outcome.is_terminal() {
            return outcome;
        }

        let elapsed = last_frame.elapsed();
        last_frame = Instant::now();
        if show_fps {
            fps.record(elapsed);
            video.present_with_overlay(gb.frame_buffer(), fps.text());
        } else {
            video.present(gb.frame_buffer());
        }
    }
}
