use gpui::{Pixels, px};
use serde::{Deserialize, Deserializer, de::Error};

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    let pixels = match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => {
            let string = match string.strip_suffix("px") {
                Some(string) => string,
                None => return Err(D::Error::custom("expected string to end with 'px'")),
            };

            match string.trim().parse::<f32>() {
                Ok(pixels) => pixels,
                Err(_) => return Err(D::Error::custom("could not convert string into pixels")),
            }
        }

        StringOrFloat::Float(pixels) => pixels,
    };

    if !pixels.is_finite() {
        return Err(D::Error::custom("length must be a finite number"));
    }

    if pixels < 0. {
        return Err(D::Error::custom("length can't be negative"));
    }

    Ok(px(pixels))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}
