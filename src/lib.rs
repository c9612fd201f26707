
pub mod numeric;
pub mod center_axis;
pub mod surface;
pub mod min_max;
pub mod bbox;

pub mod prelude;
