//! Fixed 256-symbol alphabets.
//!
//! Each table maps a byte value (the index) to one printable wide
//! character. Entries are pairwise distinct.

/// Number of symbols in every alphabet, one per byte value.
pub const ALPHABET_SIZE: usize = 256;

/// Full-width CJK ideographs. Default alphabet.
pub(crate) static CJK: [char; ALPHABET_SIZE] = [
    '丢', '虎', '丐', '丕', '丞', '乖', '乘', '乾', '乱', '乳', '了', '予', '争', '事', '二', '于',
    '亏', '云', '互', '五', '井', '亚', '些', '亡', '交', '亥', '亦', '产', '亨', '亩', '享', '京',
    '亭', '亮', '亲', '人', '亿', '什', '仁', '仅', '仆', '仇', '今', '介', '仍', '从', '仓', '仔',
    '仕', '他', '仗', '付', '仙', '代', '令', '以', '仪', '仰', '仲', '件', '价', '任', '份', '仿',
    '企', '伊', '伍', '伏', '伐', '休', '众', '优', '伙', '会', '伟', '传', '伤', '伦', '伪', '伯',
    '估', '伴', '伸', '伺', '似', '伽', '但', '位', '低', '住', '佐', '佑', '体', '何', '余', '佛',
    '作', '你', '佣', '佩', '佬', '佳', '使', '侄', '例', '侍', '供', '依', '侠', '侣', '侦', '侧',
    '侨', '侬', '侮', '侯', '侵', '便', '促', '俄', '俊', '俏', '俐', '俗', '俘', '保', '信', '修',
    '俯', '俱', '俺', '倍', '倒', '候', '倚', '借', '倦', '值', '倾', '假', '偏', '做', '停', '健',
    '偶', '偷', '偿', '傀', '傅', '傍', '储', '傲', '傻', '像', '僚', '僧', '僵', '僻', '儒', '允',
    '元', '兄', '充', '兆', '先', '光', '克', '免', '兑', '兔', '党', '兜', '兢', '入', '全', '八',
    '公', '六', '兮', '兰', '共', '关', '兴', '兵', '其', '具', '典', '兹', '养', '兼', '兽', '冀',
    '内', '册', '再', '冒', '写', '军', '农', '冠', '冬', '冰', '冲', '决', '况', '冷', '准', '凉',
    '减', '凝', '几', '凡', '凤', '凭', '凯', '凶', '凸', '凹', '出', '击', '函', '刀', '分', '切',
    '刊', '刑', '划', '列', '刚', '创', '初', '判', '别', '利', '删', '到', '制', '刷', '券', '刺',
    '刻', '剂', '削', '前', '剑', '剖', '剥', '剧', '剩', '剪', '副', '割', '劈', '力', '办', '功',
];

/// First code point of the Hangul Syllables block.
const HANGUL_BASE: u32 = 0xAC00;

/// The first 256 precomposed Hangul syllables, U+AC00 through U+ACFF.
pub(crate) static HANGUL: [char; ALPHABET_SIZE] = build_hangul_table();

const fn build_hangul_table() -> [char; ALPHABET_SIZE] {
    let mut table = ['\0'; ALPHABET_SIZE];
    let mut i = 0;
    while i < ALPHABET_SIZE {
        table[i] = match char::from_u32(HANGUL_BASE + i as u32) {
            Some(c) => c,
            None => panic!("Hangul syllable outside the Unicode scalar range"),
        };
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_distinct(table: &[char; ALPHABET_SIZE]) {
        let unique: HashSet<char> = table.iter().copied().collect();
        assert_eq!(unique.len(), ALPHABET_SIZE);
    }

    #[test]
    fn test_cjk_distinct() {
        assert_distinct(&CJK);
    }

    #[test]
    fn test_hangul_distinct() {
        assert_distinct(&HANGUL);
    }

    #[test]
    fn test_cjk_endpoints() {
        assert_eq!(CJK[0], '丢');
        assert_eq!(CJK[1], '虎');
        assert_eq!(CJK[255], '功');
    }

    #[test]
    fn test_hangul_endpoints() {
        assert_eq!(HANGUL[0], '가');
        assert_eq!(HANGUL[255] as u32, 0xACFF);
    }

    #[test]
    fn test_no_line_break_symbols() {
        for table in [&CJK, &HANGUL] {
            assert!(!table.contains(&'\r'));
            assert!(!table.contains(&'\n'));
        }
    }

    #[test]
    fn test_tables_disjoint() {
        let cjk: HashSet<char> = CJK.iter().copied().collect();
        assert!(HANGUL.iter().all(|c| !cjk.contains(c)));
    }
}
