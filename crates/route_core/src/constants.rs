/// Edge weight type, a distance in kilometers
pub type Weight = f64;
