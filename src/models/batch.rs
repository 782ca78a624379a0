//! # 批次数据模型
//!
//! 将共享同一 (配置参数, 可执行命令) 的文件聚合为一个批次。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs` 填充
//! - 被 `batch/runner.rs` 消费

use super::target::ResolvedTarget;

use std::collections::{HashMap, HashSet};

/// 批次合并键
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BatchKey {
    pub config_args: String,
    pub executable: String,
}

/// 一次子进程调用对应的文件组
#[derive(Debug, Clone)]
pub struct Batch {
    pub config_args: String,
    pub executable: String,
    pub files: Vec<String>,
    /// 已加入的文件，用于去重
    members: HashSet<String>,
}

impl Batch {
    fn new(key: BatchKey, file: String) -> Self {
        let mut batch = Self {
            config_args: key.config_args,
            executable: key.executable,
            files: Vec::new(),
            members: HashSet::new(),
        };
        batch.push(file);
        batch
    }

    /// 追加文件，重复输入只保留首次出现
    fn push(&mut self, file: String) {
        if self.members.insert(file.clone()) {
            self.files.push(file);
        }
    }

    /// 以空格拼接的文件列表
    pub fn joined_files(&self) -> String {
        self.files.join(" ")
    }
}

/// 按首次出现顺序排列的批次集合
#[derive(Debug, Default)]
pub struct BatchList {
    batches: Vec<Batch>,
    index: HashMap<BatchKey, usize>,
}

impl BatchList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 将文件加入匹配的批次，无匹配时新建批次
    pub fn add(&mut self, file: String, config_args: &str, executable: &str) {
        let key = BatchKey {
            config_args: config_args.to_string(),
            executable: executable.to_string(),
        };

        match self.index.get(&key) {
            Some(&i) => self.batches[i].push(file),
            None => {
                self.index.insert(key.clone(), self.batches.len());
                self.batches.push(Batch::new(key, file));
            }
        }
    }

    /// 加入一个解析结果
    pub fn add_target(&mut self, target: ResolvedTarget) {
        self.add(
            target.path,
            &target.config.args,
            &target.executable.command,
        );
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Batch> {
        self.batches.iter()
    }
}

impl IntoIterator for BatchList {
    type Item = Batch;
    type IntoIter = std::vec::IntoIter<Batch>;

    fn into_iter(self) -> Self::IntoIter {
        self.batches.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_merges_in_order() {
        let mut list = BatchList::new();
        list.add("/a.php".into(), "--standard=PSR12", "phpcbf");
        list.add("/b.php".into(), "--standard=PSR12", "phpcbf");
        list.add("/c.php".into(), "--standard=PSR12", "phpcbf");

        assert_eq!(list.len(), 1);
        let batch = list.iter().next().unwrap();
        assert_eq!(batch.files, vec!["/a.php", "/b.php", "/c.php"]);
        assert_eq!(batch.joined_files(), "/a.php /b.php /c.php");
    }

    #[test]
    fn test_mismatched_executables_never_share_batch() {
        let mut list = BatchList::new();
        list.add("/a.php".into(), "--standard=/repo/phpcs.xml", "phpcbf");
        list.add(
            "/b.php".into(),
            "--standard=/repo/phpcs.xml",
            "php -dmemory_limit=-1 /repo/vendor/bin/phpcbf",
        );

        assert_eq!(list.len(), 2);
        for batch in list.iter() {
            assert_eq!(batch.files.len(), 1);
        }
    }

    #[test]
    fn test_batches_keep_creation_order() {
        let mut list = BatchList::new();
        list.add("/x.php".into(), "--rules=@Symfony,@PSR12 --using-cache=no", "fixer");
        list.add("/y.php".into(), "--standard=PSR12", "phpcbf");
        list.add("/z.php".into(), "--rules=@Symfony,@PSR12 --using-cache=no", "fixer");

        let order: Vec<_> = list.iter().map(|b| b.executable.as_str()).collect();
        assert_eq!(order, vec!["fixer", "phpcbf"]);
        assert_eq!(list.iter().next().unwrap().files, vec!["/x.php", "/z.php"]);
    }

    #[test]
    fn test_duplicate_file_added_once() {
        let mut list = BatchList::new();
        list.add("/a.php".into(), "--standard=PSR12", "phpcbf");
        list.add("/a.php".into(), "--standard=PSR12", "phpcbf");

        assert_eq!(list.iter().next().unwrap().files, vec!["/a.php"]);
    }

    #[test]
    fn test_many_files_dedup_keeps_first_order() {
        let mut list = BatchList::new();
        for round in 0..2 {
            for i in 0..5000 {
                list.add(format!("/src/f{}.php", i), "--standard=PSR12", "phpcbf");
            }
            assert_eq!(list.len(), 1, "round {}", round);
        }

        let files = &list.iter().next().unwrap().files;
        assert_eq!(files.len(), 5000);
        assert_eq!(files[0], "/src/f0.php");
        assert_eq!(files[4999], "/src/f4999.php");
    }
}
