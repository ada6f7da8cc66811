use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Per-instance sphere render data, written to SharedArrayBuffer for the
/// host WebGPU renderer. 12 floats = 48 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SphereInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub emissive: f32,
    /// Axial rotation in radians (texture spin).
    pub spin: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

impl SphereInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-instance ring band data (Saturn). 12 floats = 48 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RingInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub inner: f32,
    pub outer: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub opacity: f32,
    pub tilt: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl RingInstance {
    pub const FLOATS: usize = 12;
}

/// Billboard label placement. The host resolves `text_id` to localized
/// text and draws a text sprite. 8 floats = 32 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct LabelInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub text_id: f32,
    pub scale: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

impl LabelInstance {
    pub const FLOATS: usize = 8;
}

/// A colored vertex shared by the line (orbit guides) and point
/// (starfield) buffers. 8 floats = 32 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct ColorVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Point size for point-list draws, unused for lines.
    pub size: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorVertex {
    pub const FLOATS: usize = 8;

    pub fn new(pos: Vec3, size: f32, color: [f32; 4]) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            size,
            r: color[0],
            g: color[1],
            b: color[2],
            a: color[3],
        }
    }
}

macro_rules! instance_buffer {
    ($name:ident, $item:ty) => {
        /// Flat instance buffer exposed to the host via a raw pointer.
        pub struct $name {
            items: Vec<$item>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::with_capacity(64)
            }

            pub fn with_capacity(max: usize) -> Self {
                Self {
                    items: Vec::with_capacity(max),
                }
            }

            pub fn clear(&mut self) {
                self.items.clear();
            }

            pub fn push(&mut self, item: $item) {
                self.items.push(item);
            }

            pub fn count(&self) -> u32 {
                self.items.len() as u32
            }

            pub fn as_ptr(&self) -> *const f32 {
                self.items.as_ptr() as *const f32
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

instance_buffer!(SphereBuffer, SphereInstance);
instance_buffer!(RingBuffer, RingInstance);
instance_buffer!(LabelBuffer, LabelInstance);
instance_buffer!(PathBuffer, ColorVertex);
instance_buffer!(PointBuffer, ColorVertex);

impl PathBuffer {
    /// Append a polyline as a line list (vertex pairs per segment),
    /// offset into world space.
    pub fn push_polyline(&mut self, offset: Vec3, points: &[Vec3], color: [f32; 4], closed: bool) {
        if points.len() < 2 {
            return;
        }
        for pair in points.windows(2) {
            self.push(ColorVertex::new(offset + pair[0], 0.0, color));
            self.push(ColorVertex::new(offset + pair[1], 0.0, color));
        }
        if closed {
            self.push(ColorVertex::new(offset + points[points.len() - 1], 0.0, color));
            self.push(ColorVertex::new(offset + points[0], 0.0, color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_instance_is_48_bytes() {
        assert_eq!(std::mem::size_of::<SphereInstance>(), 48);
        assert_eq!(SphereInstance::FLOATS, 12);
    }

    #[test]
    fn ring_and_label_strides() {
        assert_eq!(std::mem::size_of::<RingInstance>(), 48);
        assert_eq!(std::mem::size_of::<LabelInstance>(), 32);
        assert_eq!(std::mem::size_of::<ColorVertex>(), 32);
    }

    #[test]
    fn push_and_count() {
        let mut buf = SphereBuffer::new();
        buf.push(SphereInstance::default());
        buf.push(SphereInstance::default());
        assert_eq!(buf.count(), 2);
        buf.clear();
        assert_eq!(buf.count(), 0);
    }

    #[test]
    fn polyline_closed_adds_return_segment() {
        let mut buf = PathBuffer::new();
        let pts = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(-1.0, 0.0, 0.0),
        ];
        buf.push_polyline(Vec3::ZERO, &pts, [1.0; 4], true);
        // 2 window segments + 1 closing segment = 6 vertices
        assert_eq!(buf.count(), 6);
    }

    #[test]
    fn degenerate_polyline_ignored() {
        let mut buf = PathBuffer::new();
        buf.push_polyline(Vec3::ZERO, &[Vec3::ZERO], [1.0; 4], true);
        assert_eq!(buf.count(), 0);
    }
}
