// KNP (-tab 形式) の出力の解析
//
// 1 文は次のような行からなる：
// - "# S-ID:..."  コメント行
// - "* 1D <...>"   文節行
// - "+ 1D <...>"   基本句 (タグ) 行
// - それ以外      形態素行
// - "EOS"         文末
//
// 形態素行の解析は外から渡す (juman::parse_juman_line など)

pub mod config;
pub mod document;
pub mod feature_parser;
pub mod header_parser;
pub mod line_filter;
pub mod node_grouper;
pub mod parser;
pub mod parser_helper;
pub mod pas_parser;
pub mod rel_parser;
