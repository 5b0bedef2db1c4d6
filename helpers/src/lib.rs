pub mod general;
pub mod kv;

#[cfg(test)]
mod kv_tests {
    use crate::kv::{FileStore, KvStore, MemStore};
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn tmp_statsfile(name: &str) -> PathBuf {
        let filepath = env::temp_dir().join(name);
        let _ = fs::remove_file(&filepath);
        filepath
    }

    #[test]
    fn test_memstore_1() {
        let x = MemStore::new();
        assert_eq!(x.get("totalGames"), 0);
    }
    #[test]
    fn test_memstore_2() {
        let mut x = MemStore::new();
        x.set("totalGames", 3);
        x.set("totalGames", 7);
        assert_eq!(x.get("totalGames"), 7);
    }
    #[test]
    fn test_memstore_3() {
        let mut x = MemStore::new();
        x.set("max", 25);
        x.remove("max");
        x.remove("max");
        assert_eq!(x.get("max"), 0);
    }
    #[test]
    fn test_memstore_4() {
        // clones must share the underlying map
        let mut x = MemStore::new();
        let y = x.clone();
        x.set("totalGames", 5);
        assert_eq!(y.get("totalGames"), 5);
    }

    #[test]
    fn test_filestore_1() {
        let filepath = tmp_statsfile("kv_test_filestore_1.json");
        let x = FileStore::open(filepath.as_path()).unwrap();
        assert_eq!(x.get("totalGames"), 0);
    }
    #[test]
    fn test_filestore_2() {
        let filepath = tmp_statsfile("kv_test_filestore_2.json");

        {
            let mut x = FileStore::open(filepath.as_path()).unwrap();
            x.set("totalGames", 12);
            x.set("max", 40);
        }

        // values must survive reopening the store
        let y = FileStore::open(filepath.as_path()).unwrap();
        assert_eq!(y.get("totalGames"), 12);
        assert_eq!(y.get("max"), 40);

        let _ = fs::remove_file(&filepath);
    }
    #[test]
    fn test_filestore_3() {
        let filepath = tmp_statsfile("kv_test_filestore_3.json");

        {
            let mut x = FileStore::open(filepath.as_path()).unwrap();
            x.set("totalGames", 12);
            x.remove("totalGames");
        }

        let y = FileStore::open(filepath.as_path()).unwrap();
        assert_eq!(y.get("totalGames"), 0);

        let _ = fs::remove_file(&filepath);
    }
}
