pub(crate) mod hsv;
