//! The three OCR fixture flavors: layout tables, font candidates, and the
//! generation routines that rasterize and persist them.
//!
//! All text content, coordinates, colors and canvas dimensions are fixed
//! constants per flavor, so generation is deterministic given the same font
//! availability on the host. The draw loop is a uniform iteration over the
//! flavor's layout lines.

use crate::canvas::Canvas;
use crate::colors;
use crate::draw::{Border, Rectangle};
use crate::error::Result;
use crate::pixel::Rgb;
use crate::text::{Font, TextSegment};

use log::info;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// The directory fixtures are written to, relative to the working directory.
pub const OUTPUT_DIR: &str = "test/test_images";

/// Inset of the border rectangle from each canvas edge, in pixels.
const BORDER_INSET: u32 = 10;

/// Stroke width of the border rectangle, in pixels.
const BORDER_THICKNESS: u32 = 2;

/// Point sizes of the three font roles.
const LARGE_SIZE: f32 = 48.0;
const MEDIUM_SIZE: f32 = 32.0;
const SMALL_SIZE: f32 = 24.0;

/// One of the three fixture variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// English-only content on an 800x600 canvas.
    English,
    /// Chinese-only content on an 800x600 canvas.
    Chinese,
    /// Mixed English/Chinese content with a tabular block on an 800x700
    /// canvas.
    Mixed,
}

/// Which of a routine's three resolved fonts a layout line is drawn with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontRole {
    /// 48 px, used for titles.
    Large,
    /// 32 px, used for labeled fields.
    Medium,
    /// 24 px, used for addresses, free-text blocks and table rows.
    Small,
}

impl FontRole {
    /// Returns the point size of this role.
    #[must_use]
    pub const fn size(&self) -> f32 {
        match self {
            Self::Large => LARGE_SIZE,
            Self::Medium => MEDIUM_SIZE,
            Self::Small => SMALL_SIZE,
        }
    }
}

/// One line of a fixture layout: text content, top-left anchor, fill color
/// and font role. Lines are consumed immediately by the draw loop.
#[derive(Copy, Clone, Debug)]
pub struct TextLine {
    /// The text content of the line.
    pub text: &'static str,
    /// Horizontal position of the top-left anchor.
    pub x: u32,
    /// Vertical position of the top-left anchor.
    pub y: u32,
    /// The fill color of the line.
    pub fill: Rgb,
    /// The font the line is drawn with.
    pub role: FontRole,
}

/// A multi-line free-text block, split on line boundaries at draw time with
/// the vertical cursor advancing by `step` per line.
struct BodyBlock {
    text: &'static str,
    x: u32,
    y: u32,
    step: u32,
    fill: Rgb,
    role: FontRole,
}

impl BodyBlock {
    fn push_lines(&self, lines: &mut Vec<TextLine>) {
        for (index, text) in self.text.split('\n').enumerate() {
            lines.push(TextLine {
                text,
                x: self.x,
                y: self.y + index as u32 * self.step,
                fill: self.fill,
                role: self.role,
            });
        }
    }
}

const ENGLISH_TITLE: TextLine = TextLine {
    text: "OCR Test Image",
    x: 50,
    y: 50,
    fill: colors::BLACK,
    role: FontRole::Large,
};

const ENGLISH_FIELDS: [TextLine; 5] = [
    TextLine {
        text: "Hello World! This is a test for OCR recognition.",
        x: 50,
        y: 120,
        fill: colors::BLUE,
        role: FontRole::Medium,
    },
    TextLine {
        text: "Phone: +86 138-0013-8000",
        x: 50,
        y: 170,
        fill: colors::RED,
        role: FontRole::Medium,
    },
    TextLine {
        text: "Email: test@example.com",
        x: 50,
        y: 220,
        fill: colors::GREEN,
        role: FontRole::Medium,
    },
    TextLine {
        text: "Date: 2025-10-03",
        x: 50,
        y: 270,
        fill: colors::PURPLE,
        role: FontRole::Medium,
    },
    TextLine {
        text: "Address: 123 Main Street, City, Country",
        x: 50,
        y: 320,
        fill: colors::BROWN,
        role: FontRole::Small,
    },
];

const ENGLISH_BODY: BodyBlock = BodyBlock {
    text: "This is a multi-line text example.\n\
           It contains multiple sentences.\n\
           Each line should be recognized separately.\n\
           OCR should handle this correctly.",
    x: 50,
    y: 370,
    step: 30,
    fill: colors::BLACK,
    role: FontRole::Small,
};

const CHINESE_TITLE: TextLine = TextLine {
    text: "OCR中文测试图片",
    x: 50,
    y: 50,
    fill: colors::BLACK,
    role: FontRole::Large,
};

const CHINESE_FIELDS: [TextLine; 5] = [
    TextLine {
        text: "你好世界！这是一个OCR识别测试。",
        x: 50,
        y: 120,
        fill: colors::BLUE,
        role: FontRole::Medium,
    },
    TextLine {
        text: "联系电话：138-0013-8000",
        x: 50,
        y: 170,
        fill: colors::RED,
        role: FontRole::Medium,
    },
    TextLine {
        text: "电子邮箱：测试@示例.com",
        x: 50,
        y: 220,
        fill: colors::GREEN,
        role: FontRole::Medium,
    },
    TextLine {
        text: "日期：2025年10月3日",
        x: 50,
        y: 270,
        fill: colors::PURPLE,
        role: FontRole::Medium,
    },
    TextLine {
        text: "地址：北京市朝阳区某某街道123号",
        x: 50,
        y: 320,
        fill: colors::BROWN,
        role: FontRole::Small,
    },
];

const CHINESE_BODY: BodyBlock = BodyBlock {
    text: "这是一个多行中文文本示例。\n\
           它包含多个句子和段落。\n\
           每一行都应该被正确识别。\n\
           OCR应该能够处理中文字符。",
    x: 50,
    y: 370,
    step: 35,
    fill: colors::BLACK,
    role: FontRole::Small,
};

const MIXED_TITLE: TextLine = TextLine {
    text: "OCR Mixed Language Test 中英文混合测试",
    x: 50,
    y: 50,
    fill: colors::BLACK,
    role: FontRole::Large,
};

const MIXED_FIELDS: [&str; 10] = [
    "Name 姓名: Zhang San 张三",
    "Company 公司: ABC Technology Ltd. ABC科技有限公司",
    "Position 职位: Software Engineer 软件工程师",
    "Phone 电话: +86 138-0013-8000",
    "Email 邮箱: zhangsan@abc-tech.com",
    "Address 地址: Room 1001, Building A, 北京市朝阳区",
    "Project 项目: Information Management System 信息管理系统",
    "Status 状态: In Development 开发中",
    "Priority 优先级: High 高",
    "Deadline 截止日期: 2025-12-31",
];

/// Field lines cycle through this palette when there are more lines than
/// named colors.
const MIXED_PALETTE: [Rgb; 10] = [
    colors::BLUE,
    colors::RED,
    colors::GREEN,
    colors::PURPLE,
    colors::BROWN,
    colors::ORANGE,
    colors::NAVY,
    colors::DARK_GREEN,
    colors::DARK_RED,
    colors::DARK_BLUE,
];

const MIXED_FIELDS_Y: u32 = 120;
const MIXED_FIELDS_STEP: u32 = 40;

const MIXED_TABLE_HEADING: TextLine = TextLine {
    text: "Test Data 测试数据:",
    x: 50,
    y: 540,
    fill: colors::BLACK,
    role: FontRole::Medium,
};

const MIXED_TABLE_ROWS: [&str; 5] = [
    "ID | Name | Age | City",
    "1  | John | 25  | Beijing 北京",
    "2  | Mary | 30  | Shanghai 上海",
    "3  | 李四 | 28  | Guangzhou 广州",
    "4  | 王五 | 35  | Shenzhen 深圳",
];

const MIXED_TABLE_Y: u32 = 580;
const MIXED_TABLE_STEP: u32 = 25;

/// Candidate font paths for Latin-only content. The Windows Arial locations
/// come first, then common Linux and macOS sans-serif locations.
const ENGLISH_FONTS: [&str; 5] = [
    "arial.ttf",
    "C:/Windows/Fonts/arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
];

/// Candidate font paths for Han-capable content, SimSun first.
const CHINESE_FONTS: [&str; 5] = [
    "C:/Windows/Fonts/simsun.ttc",
    "C:/Windows/Fonts/msyh.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/opentype/noto/NotoSerifCJK-Regular.ttc",
    "/System/Library/Fonts/PingFang.ttc",
];

/// Candidate font paths for mixed content, Microsoft YaHei first.
const MIXED_FONTS: [&str; 5] = [
    "C:/Windows/Fonts/msyh.ttc",
    "C:/Windows/Fonts/simsun.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/opentype/noto/NotoSerifCJK-Regular.ttc",
    "/System/Library/Fonts/PingFang.ttc",
];

/// The three fonts one generation routine draws with, resolved together over
/// one candidate list. They either all resolve from the same source or all
/// fall back together.
struct FontSet {
    large: Font,
    medium: Font,
    small: Font,
}

impl FontSet {
    fn resolve(candidates: &[&str]) -> Self {
        Self {
            large: Font::resolve(candidates, FontRole::Large.size()),
            medium: Font::resolve(candidates, FontRole::Medium.size()),
            small: Font::resolve(candidates, FontRole::Small.size()),
        }
    }

    fn get(&self, role: FontRole) -> &Font {
        match role {
            FontRole::Large => &self.large,
            FontRole::Medium => &self.medium,
            FontRole::Small => &self.small,
        }
    }
}

impl Flavor {
    /// All three flavors, in generation order.
    pub const ALL: [Self; 3] = [Self::English, Self::Chinese, Self::Mixed];

    /// Returns the canvas dimensions of this flavor.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::English | Self::Chinese => (800, 600),
            Self::Mixed => (800, 700),
        }
    }

    /// Returns the file name this flavor is saved under.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::English => "ocr_test_english.png",
            Self::Chinese => "ocr_test_chinese.png",
            Self::Mixed => "ocr_test_mixed.png",
        }
    }

    const fn font_candidates(&self) -> &'static [&'static str] {
        match self {
            Self::English => &ENGLISH_FONTS,
            Self::Chinese => &CHINESE_FONTS,
            Self::Mixed => &MIXED_FONTS,
        }
    }

    /// Returns every layout line of this flavor, in draw order: the title,
    /// the labeled fields, the expanded free-text block, and for the mixed
    /// flavor the table heading and rows.
    #[must_use]
    pub fn lines(&self) -> Vec<TextLine> {
        let mut lines = Vec::new();

        match self {
            Self::English => {
                lines.push(ENGLISH_TITLE);
                lines.extend(ENGLISH_FIELDS);
                ENGLISH_BODY.push_lines(&mut lines);
            }
            Self::Chinese => {
                lines.push(CHINESE_TITLE);
                lines.extend(CHINESE_FIELDS);
                CHINESE_BODY.push_lines(&mut lines);
            }
            Self::Mixed => {
                lines.push(MIXED_TITLE);
                for (index, text) in MIXED_FIELDS.into_iter().enumerate() {
                    lines.push(TextLine {
                        text,
                        x: 50,
                        y: MIXED_FIELDS_Y + index as u32 * MIXED_FIELDS_STEP,
                        fill: MIXED_PALETTE[index % MIXED_PALETTE.len()],
                        role: FontRole::Medium,
                    });
                }
                lines.push(MIXED_TABLE_HEADING);
                for (index, text) in MIXED_TABLE_ROWS.into_iter().enumerate() {
                    lines.push(TextLine {
                        text,
                        x: 50,
                        y: MIXED_TABLE_Y + index as u32 * MIXED_TABLE_STEP,
                        fill: colors::BLACK,
                        role: FontRole::Small,
                    });
                }
            }
        }

        lines
    }

    /// Generates this fixture under [`OUTPUT_DIR`], creating the directory
    /// if it is absent and overwriting any prior file of the same name.
    ///
    /// # Errors
    /// * The output directory cannot be created or the file cannot be
    ///   written.
    pub fn generate(&self) -> Result<PathBuf> {
        self.generate_in(OUTPUT_DIR)
    }

    /// Generates this fixture under the given directory. The file name,
    /// canvas dimensions and content are fixed per flavor.
    ///
    /// # Errors
    /// * The directory cannot be created or the file cannot be written.
    pub fn generate_in(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        let fonts = FontSet::resolve(self.font_candidates());
        let (width, height) = self.dimensions();
        let mut canvas = Canvas::new(width, height, colors::WHITE);

        for line in self.lines() {
            canvas.draw(
                &TextSegment::new(fonts.get(line.role), line.text, line.fill)
                    .with_position(line.x, line.y),
            );
        }

        canvas.draw(
            &Rectangle::from_bounding_box(
                BORDER_INSET,
                BORDER_INSET,
                width - BORDER_INSET,
                height - BORDER_INSET,
            )
            .with_border(Border::new(colors::BLACK, BORDER_THICKNESS)),
        );

        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        canvas.save(&path)?;
        info!("{} fixture written to {}", self, path.display());

        Ok(path)
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::English => "english",
            Self::Chinese => "chinese",
            Self::Mixed => "mixed",
        })
    }
}

/// Generates all three fixtures sequentially under [`OUTPUT_DIR`],
/// fail-fast: the first error aborts the remaining flavors, leaving any
/// already-written files on disk.
///
/// # Errors
/// * Any flavor fails to generate.
pub fn generate_all() -> Result<Vec<PathBuf>> {
    generate_all_in(OUTPUT_DIR)
}

/// Generates all three fixtures sequentially under the given directory,
/// fail-fast.
///
/// # Errors
/// * Any flavor fails to generate.
pub fn generate_all_in(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();

    Flavor::ALL
        .iter()
        .map(|flavor| flavor.generate_in(dir))
        .collect()
}
