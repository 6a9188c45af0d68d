pub fn bare(value: u8) -> u8 {
    value
}

pub struct Nameless;
