mod normalize;
mod suffix;
