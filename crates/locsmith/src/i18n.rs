//! Localized locator descriptions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::result::LocatorError;

/// UI locale for descriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Vietnamese
    Vi,
}

impl Locale {
    /// Message table for this locale
    #[must_use]
    pub const fn messages(self) -> &'static Messages {
        match self {
            Self::En => &EN,
            Self::Vi => &VI,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::En => "en",
            Self::Vi => "vi",
        })
    }
}

impl FromStr for Locale {
    type Err = LocatorError;

    /// Accepts `en`, `vi` and region-qualified forms such as `en-US` or `vi_VN`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Ok(Self::En),
            "vi" => Ok(Self::Vi),
            _ => Err(LocatorError::UnknownLocale {
                name: s.to_string(),
            }),
        }
    }
}

/// Static description strings for one locale
#[derive(Debug)]
pub struct Messages {
    /// Stable id
    pub id_robust: &'static str,
    /// Generated-looking id
    pub id_dynamic: &'static str,
    /// `name` attribute
    pub name: &'static str,
    /// Link text
    pub link_text: &'static str,
    /// `tag#id` CSS
    pub css_id: &'static str,
    /// Single class CSS
    pub css_class: &'static str,
    /// Multi-class CSS
    pub css_class_multi: &'static str,
    css_attr: &'static str,
    /// Normalized-space text XPath
    pub xpath_text: &'static str,
    /// Exact text XPath
    pub xpath_text_exact: &'static str,
    /// Text plus class XPath
    pub xpath_text_class: &'static str,
    /// Partial text XPath
    pub xpath_contains: &'static str,
    /// Partial text XPath over nested children
    pub xpath_contains_nested: &'static str,
    /// Attribute XPath
    pub xpath_attr: &'static str,
    /// Label-anchored lookup
    pub xpath_label: &'static str,
    /// Role-based lookup
    pub role: &'static str,
    /// Placeholder lookup
    pub placeholder: &'static str,
    /// Exact visible-text lookup
    pub text: &'static str,
    duplicate: &'static str,
    /// Appended when a duplicate CSS selector became an indexed XPath
    pub converted_to_xpath: &'static str,
    /// Appended when a duplicate CSS selector fell back to `:nth-of-type`
    pub nth_of_type_warning: &'static str,
    /// Appended when a duplicate cannot be indexed by the tool
    pub manual_indexing: &'static str,
}

impl Messages {
    /// Description for an attribute locator
    #[must_use]
    pub fn css_attr(&self, attr: &str) -> String {
        self.css_attr.replace("{attr}", attr)
    }

    /// Duplicate annotation with a 1-based occurrence number
    #[must_use]
    pub fn duplicate(&self, index: usize) -> String {
        self.duplicate.replace("{n}", &index.to_string())
    }
}

static EN: Messages = Messages {
    id_robust: "Fastest & most stable. Preferred best practice.",
    id_dynamic: "Warning: ID looks dynamic/generated. May break on next run.",
    name: "Very fast. Second best option for Form elements.",
    link_text: "Best for <a> tags. Matches exact link text.",
    css_id: "High performance CSS selector using ID.",
    css_class: "Good if class names are meaningful and unique.",
    css_class_multi: "More specific combination of classes.",
    css_attr: "Targeting '{attr}'. Good alternative if ID is missing.",
    xpath_text: "Robust. Uses normalize-space() to ignore newlines/whitespace.",
    xpath_text_exact: "Exact match. Simple and effective for clean text.",
    xpath_text_class: "Highly specific: Matches both text and class.",
    xpath_contains: "Flexible. Matches partial text content.",
    xpath_contains_nested: "Flexible. Matches partial text content. (Nested)",
    xpath_attr: "Fallback attribute selection.",
    xpath_label: "Robust Form Strategy. Locates input via its Label text.",
    role: "User-facing locator by accessible role and name.",
    placeholder: "Matches the input's placeholder text.",
    text: "Matches the exact visible text. Breaks when the copy changes.",
    duplicate: "(Duplicate #{n})",
    converted_to_xpath: "[Converted to XPath for indexing]",
    nth_of_type_warning: "[Warning: :nth-of-type depends on tag structure]",
    manual_indexing: "[Manual indexing required]",
};

static VI: Messages = Messages {
    id_robust: "Nhanh & ổn định nhất. Ưu tiên số 1.",
    id_dynamic: "Cảnh báo: ID có vẻ là động (sinh tự động). Dễ gây lỗi script.",
    name: "Rất nhanh. Ưu tiên số 2 cho các phần tử Form.",
    link_text: "Tốt nhất cho thẻ <a>. Tìm theo nội dung link.",
    css_id: "Hiệu năng cao. CSS Selector dựa trên ID.",
    css_class: "Tốt nếu tên class có ý nghĩa và duy nhất.",
    css_class_multi: "Kết hợp nhiều class để tăng độ chính xác.",
    css_attr: "Dùng thuộc tính '{attr}'. Giải pháp thay thế tốt.",
    xpath_text: "Mạnh mẽ. Dùng normalize-space() để xử lý khoảng trắng/xuống dòng.",
    xpath_text_exact: "Chính xác tuyệt đối. Ngắn gọn, hiệu quả khi văn bản sạch.",
    xpath_text_class: "Rất cụ thể: khớp cả văn bản và class.",
    xpath_contains: "Linh hoạt. Khớp một phần nội dung văn bản.",
    xpath_contains_nested: "Linh hoạt. Khớp một phần nội dung văn bản. (Lồng nhau)",
    xpath_attr: "Dùng XPath với thuộc tính (Fallback).",
    xpath_label: "Chiến lược Form ổn định. Tìm Input dựa theo nhãn (Label) của nó.",
    role: "Tìm theo vai trò (role) và tên hiển thị với người dùng.",
    placeholder: "Khớp theo placeholder của ô nhập liệu.",
    text: "Khớp chính xác văn bản hiển thị. Hỏng khi nội dung thay đổi.",
    duplicate: "(Trùng lặp #{n})",
    converted_to_xpath: "[Đã chuyển sang XPath để đánh chỉ số]",
    nth_of_type_warning: "[Cảnh báo: :nth-of-type phụ thuộc cấu trúc thẻ]",
    manual_indexing: "[Cần đánh chỉ số thủ công]",
};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_with_region() {
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("vi_VN".parse::<Locale>().unwrap(), Locale::Vi);
        assert_eq!(" VI ".parse::<Locale>().unwrap(), Locale::Vi);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_parameterized_messages() {
        let en = Locale::En.messages();
        assert_eq!(
            en.css_attr("title"),
            "Targeting 'title'. Good alternative if ID is missing."
        );
        assert_eq!(en.duplicate(3), "(Duplicate #3)");
        assert_eq!(Locale::Vi.messages().duplicate(2), "(Trùng lặp #2)");
    }
}
