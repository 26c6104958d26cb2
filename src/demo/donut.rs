//! Spinning ASCII donut.
//!
//! Renders a rotating torus with a z-buffer into an 80x22 character frame,
//! homing the cursor between frames. Runs until a key is pressed.

use core::f32::consts::TAU;

use libm::{cosf, sinf};

use crate::hal::Board;

pub const WIDTH: usize = 80;
pub const HEIGHT: usize = 22;
pub const FRAME_SIZE: usize = WIDTH * HEIGHT;

/// Luminance ramp, darkest first
const SHADES: &[u8; 12] = b".,-~:;=!*#$@";

/// Angle steps around the tube and around the torus
const THETA_STEP: f32 = 0.07;
const PHI_STEP: f32 = 0.02;

/// Rotation per frame about the X and Z axes
const A_STEP: f32 = 0.04;
const B_STEP: f32 = 0.02;

/// One rendered frame, row-major
pub struct Frame {
    chars: [u8; FRAME_SIZE],
    depth: [f32; FRAME_SIZE],
}

impl Frame {
    pub const fn new() -> Self {
        Self {
            chars: [b' '; FRAME_SIZE],
            depth: [0.0; FRAME_SIZE],
        }
    }

    /// Render the torus rotated by `a` (X axis) and `b` (Z axis)
    pub fn render(&mut self, a: f32, b: f32) {
        self.chars.fill(b' ');
        self.depth.fill(0.0);

        let (sin_a, cos_a) = (sinf(a), cosf(a));
        let (sin_b, cos_b) = (sinf(b), cosf(b));

        let mut theta = 0.0f32;
        while theta < TAU {
            let (sin_t, cos_t) = (sinf(theta), cosf(theta));
            // Distance from the torus axis
            let h = cos_t + 2.0;

            let mut phi = 0.0f32;
            while phi < TAU {
                let (sin_p, cos_p) = (sinf(phi), cosf(phi));

                let inv_z = 1.0 / (sin_p * h * sin_a + sin_t * cos_a + 5.0);
                let t = sin_p * h * cos_a - sin_t * sin_a;

                let x = 40.0 + 30.0 * inv_z * (cos_p * h * cos_b - t * sin_b);
                let y = 12.0 + 15.0 * inv_z * (cos_p * h * sin_b + t * cos_b);

                if x > 0.0 && x < WIDTH as f32 && y > 0.0 && y < HEIGHT as f32 {
                    let idx = x as usize + WIDTH * y as usize;
                    if inv_z > self.depth[idx] {
                        let lum = 8.0
                            * ((sin_t * sin_a - sin_p * cos_t * cos_a) * cos_b
                                - sin_p * cos_t * sin_a
                                - sin_t * cos_a
                                - cos_p * cos_t * sin_b);
                        let shade = if lum > 0.0 { lum as usize } else { 0 };
                        self.depth[idx] = inv_z;
                        self.chars[idx] = SHADES[shade.min(SHADES.len() - 1)];
                    }
                }
                phi += PHI_STEP;
            }
            theta += THETA_STEP;
        }
    }

    /// Row `y` as text
    pub fn row(&self, y: usize) -> &str {
        let row = &self.chars[y * WIDTH..(y + 1) * WIDTH];
        // Only ASCII from SHADES and spaces is ever stored
        core::str::from_utf8(row).unwrap_or("")
    }

    /// Number of lit cells
    pub fn lit(&self) -> usize {
        self.chars.iter().filter(|&&c| c != b' ').count()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

/// Animate until a key arrives. The key is consumed.
pub fn run(board: &mut dyn Board) {
    let mut frame = Frame::new();
    let (mut a, mut b) = (0.0f32, 0.0f32);

    let _ = board.write_str("\x1b[2J");
    loop {
        frame.render(a, b);

        let _ = board.write_str("\x1b[H");
        for y in 0..HEIGHT {
            let _ = writeln!(board, "{}", frame.row(y));
        }

        a += A_STEP;
        b += B_STEP;

        if board.char_available() {
            let _ = board.read_char();
            break;
        }
    }
}
