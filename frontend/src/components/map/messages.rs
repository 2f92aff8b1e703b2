/// Pointer positions are in pixels relative to the map element.
pub enum Msg {
    PointerDown([f64; 2]),
    PointerMove([f64; 2]),
    PointerUp([f64; 2]),
    PointerLeave,
    DoubleClick([f64; 2]),
    /// Wheel at a position; the sign of the delta picks the zoom direction.
    Wheel([f64; 2], f64),
    Resize(f64, f64),
}
