use cbindgen::{Config, Language};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    // 获取目标目录（根据构建模式，可能是 target/debug 或 target/release）
    let target_dir =
        PathBuf::from(env::var("CARGO_TARGET_DIR").unwrap_or_else(|_| "target".into()));
    let out_dir = if cfg!(debug_assertions) {
        target_dir.join("debug")
    } else {
        target_dir.join("release")
    };

    // 获取当前 crate 的根目录
    let crate_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR 未设置，跳过头文件生成");
            return;
        }
    };
    let out_dir = if out_dir.is_absolute() {
        out_dir
    } else {
        crate_dir.join(out_dir)
    };

    // 加载配置文件，没有则使用默认的 C 配置
    let config = load_config(&crate_dir.join("cbindgen.toml"));

    // 头文件只是附带产物，生成失败不应该让库本身构建失败
    match cbindgen::generate_with_config(&crate_dir, config) {
        Ok(bindings) => {
            if let Err(e) = fs::create_dir_all(&out_dir) {
                println!("cargo:warning=无法创建输出目录 {}: {e}", out_dir.display());
                return;
            }
            bindings.write_to_file(out_dir.join("linked_containers.h"));
        }
        Err(e) => {
            println!("cargo:warning=生成 C 头文件失败: {e}");
        }
    }
}

fn load_config(path: &Path) -> Config {
    match Config::from_file(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            println!("cargo:warning=无法加载 cbindgen.toml ({e})，使用默认配置");
            Config {
                language: Language::C,
                ..Config::default()
            }
        }
    }
}
