//! Writing numbers with comma as a thousands separator.

use std::fmt::{self, Write};

pub trait CommaWrite: Copy {
    fn comma_write_to<W: Write>(self, f: W) -> fmt::Result;

    #[inline]
    fn comma_string(self) -> String {
        let mut s = String::new();
        self.comma_write_to(&mut s).expect("Cannot write to string");
        s
    }
}

impl CommaWrite for u64 {
    fn comma_write_to<W: Write>(self, mut f: W) -> fmt::Result {
        const K: u64 = 1000;
        if self < K {
            return write!(f, "{}", self);
        }
        // Groups of three digits, lowest first.
        let mut groups = Vec::with_capacity(7);
        let mut rest = self;
        while rest >= K {
            groups.push(rest % K);
            rest /= K;
        }
        write!(f, "{}", rest)?;
        for group in groups.iter().rev() {
            write!(f, ",{:03}", group)?;
        }
        Ok(())
    }
}

impl CommaWrite for u32 {
    #[inline]
    fn comma_write_to<W: Write>(self, f: W) -> fmt::Result {
        u64::from(self).comma_write_to(f)
    }
}
