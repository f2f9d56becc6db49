//! Type definitions and enums.

use std::fmt;

/// Kind of GDI object, as reported by the platform's object-type query
/// (`GetObjectType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Cosmetic pen.
    Pen,
    /// Brush.
    Brush,
    /// Device context.
    Dc,
    /// Metafile device context.
    MetaDc,
    /// Logical palette.
    Palette,
    /// Logical font.
    Font,
    /// Bitmap.
    Bitmap,
    /// Region.
    Region,
    /// Metafile.
    MetaFile,
    /// Memory device context.
    MemDc,
    /// Extended pen.
    ExtPen,
    /// Enhanced metafile device context.
    EnhMetaDc,
    /// Enhanced metafile.
    EnhMetaFile,
    /// Color space.
    ColorSpace,
}

impl ObjectKind {
    /// Decode an object-type code. Returns `None` for 0 (invalid handle)
    /// and for codes the platform has not documented.
    pub fn from_code(code: u32) -> Option<Self> {
        let kind = match code {
            1 => ObjectKind::Pen,
            2 => ObjectKind::Brush,
            3 => ObjectKind::Dc,
            4 => ObjectKind::MetaDc,
            5 => ObjectKind::Palette,
            6 => ObjectKind::Font,
            7 => ObjectKind::Bitmap,
            8 => ObjectKind::Region,
            9 => ObjectKind::MetaFile,
            10 => ObjectKind::MemDc,
            11 => ObjectKind::ExtPen,
            12 => ObjectKind::EnhMetaDc,
            13 => ObjectKind::EnhMetaFile,
            14 => ObjectKind::ColorSpace,
            _ => return None,
        };
        Some(kind)
    }

    /// The platform's object-type code for this kind.
    pub fn code(self) -> u32 {
        match self {
            ObjectKind::Pen => 1,
            ObjectKind::Brush => 2,
            ObjectKind::Dc => 3,
            ObjectKind::MetaDc => 4,
            ObjectKind::Palette => 5,
            ObjectKind::Font => 6,
            ObjectKind::Bitmap => 7,
            ObjectKind::Region => 8,
            ObjectKind::MetaFile => 9,
            ObjectKind::MemDc => 10,
            ObjectKind::ExtPen => 11,
            ObjectKind::EnhMetaDc => 12,
            ObjectKind::EnhMetaFile => 13,
            ObjectKind::ColorSpace => 14,
        }
    }

    /// Check whether an object of this kind may be used where `expected`
    /// is required. Extended pens are valid pen handles.
    pub fn satisfies(self, expected: ObjectKind) -> bool {
        self == expected || (self == ObjectKind::ExtPen && expected == ObjectKind::Pen)
    }

    fn name(self) -> &'static str {
        match self {
            ObjectKind::Pen => "pen",
            ObjectKind::Brush => "brush",
            ObjectKind::Dc => "device context",
            ObjectKind::MetaDc => "metafile device context",
            ObjectKind::Palette => "palette",
            ObjectKind::Font => "font",
            ObjectKind::Bitmap => "bitmap",
            ObjectKind::Region => "region",
            ObjectKind::MetaFile => "metafile",
            ObjectKind::MemDc => "memory device context",
            ObjectKind::ExtPen => "extended pen",
            ObjectKind::EnhMetaDc => "enhanced metafile device context",
            ObjectKind::EnhMetaFile => "enhanced metafile",
            ObjectKind::ColorSpace => "color space",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
