#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    Dec,
    Hex,
    Oct,
    Bin,
}

impl Radix {
    pub const ALL: [Radix; 4] = [Radix::Dec, Radix::Hex, Radix::Oct, Radix::Bin];

    pub fn base(self) -> u32 {
        match self {
            Radix::Dec => 10,
            Radix::Hex => 16,
            Radix::Oct => 8,
            Radix::Bin => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Radix::Dec => "Decimal (10)",
            Radix::Hex => "Hexadecimal (16)",
            Radix::Oct => "Octal (8)",
            Radix::Bin => "Binary (2)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Radix::Dec => "123",
            Radix::Hex => "7B",
            Radix::Oct => "173",
            Radix::Bin => "1111011",
        }
    }

    fn format(self, value: i64) -> String {
        let sign = if value < 0 { "-" } else { "" };
        let magnitude = value.unsigned_abs();
        match self {
            Radix::Dec => format!("{value}"),
            Radix::Hex => format!("{sign}{magnitude:X}"),
            Radix::Oct => format!("{sign}{magnitude:o}"),
            Radix::Bin => format!("{sign}{magnitude:b}"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseFields {
    pub dec: String,
    pub hex: String,
    pub oct: String,
    pub bin: String,
}

impl BaseFields {
    pub fn get(&self, radix: Radix) -> &str {
        match radix {
            Radix::Dec => &self.dec,
            Radix::Hex => &self.hex,
            Radix::Oct => &self.oct,
            Radix::Bin => &self.bin,
        }
    }

    fn slot(&mut self, radix: Radix) -> &mut String {
        match radix {
            Radix::Dec => &mut self.dec,
            Radix::Hex => &mut self.hex,
            Radix::Oct => &mut self.oct,
            Radix::Bin => &mut self.bin,
        }
    }

    // Invalid input stays as typed in its own box.
    pub fn edit(&mut self, radix: Radix, input: &str) {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            *self = Self::default();
            return;
        }
        match i64::from_str_radix(trimmed, radix.base()) {
            Ok(value) => {
                for target in Radix::ALL {
                    *self.slot(target) = target.format(value);
                }
            }
            Err(_) => *self.slot(radix) = input.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_input_fills_every_base() {
        let mut fields = BaseFields::default();
        fields.edit(Radix::Hex, "7b");
        assert_eq!(
            fields,
            BaseFields {
                dec: "123".into(),
                hex: "7B".into(),
                oct: "173".into(),
                bin: "1111011".into(),
            }
        );
    }

    #[test]
    fn invalid_input_only_touches_its_own_box() {
        let mut fields = BaseFields::default();
        fields.edit(Radix::Dec, "10");
        fields.edit(Radix::Bin, "102");
        assert_eq!(fields.bin, "102");
        assert_eq!(fields.dec, "10");
        assert_eq!(fields.hex, "A");
    }

    #[test]
    fn clearing_a_box_clears_all() {
        let mut fields = BaseFields::default();
        fields.edit(Radix::Oct, "17");
        fields.edit(Radix::Oct, "");
        assert_eq!(fields, BaseFields::default());
    }

    #[test]
    fn negatives_keep_their_sign() {
        let mut fields = BaseFields::default();
        fields.edit(Radix::Dec, "-255");
        assert_eq!(fields.hex, "-FF");
        assert_eq!(fields.bin, "-11111111");
    }
}
