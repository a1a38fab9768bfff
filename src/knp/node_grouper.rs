use anyhow::{ensure, Result};

// prefix で始まる行から次の prefix 行の手前までを 1 ノードとして parse_node に渡す
//
// 先頭行が prefix で始まっていなければエラー
pub fn group_nodes<'a, N, F>(
    prefix: &str,
    lines: &'a [&'a str],
    mut parse_node: F,
) -> Result<Vec<N>>
where
    F: FnMut(&'a [&'a str]) -> Result<N>,
{
    let mut lines = lines;
    let mut nodes = Vec::new();

    while let Some(head) = lines.first() {
        ensure!(
            head.starts_with(prefix),
            "Expected a line starting with {:?}: {:?}",
            prefix,
            lines
        );

        let end = lines[1..]
            .iter()
            .position(|line| line.starts_with(prefix))
            .map_or(lines.len(), |i| i + 1);

        nodes.push(parse_node(&lines[..end])?);
        lines = &lines[end..];
    }

    Ok(nodes)
}
