/// A pixel coordinate. The y axis grows downward, matching raster order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
