// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 规范化页面输入的检索词：去掉首尾空白并转为小写
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// 标题格式：每个字母串的首字母大写，其余小写
///
/// 非字母字符视为分隔符，因此 "ar/vr" 变为 "Ar/Vr"。
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
