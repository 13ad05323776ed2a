use proc_macro2::TokenStream;
use quote::quote;
use std::env;
use std::fs;
use std::path::Path;

// Note: These types are only used in build.rs for parsing the TOML file
// The actual types used in the crate are generated from this data

#[derive(Debug, serde::Deserialize)]
struct PrecisionConfig {
    precision: Vec<PrecisionDef>,
}

#[derive(Debug, serde::Deserialize)]
struct PrecisionDef {
    enum_name: String,
    name: String,
    display_name: String,
    scale: i64,
}

fn main() {
    println!("cargo:rerun-if-changed=config/precisions.toml");

    // 讀取 precisions.toml
    let toml_content = fs::read_to_string("config/precisions.toml")
        .expect("Failed to read config/precisions.toml");

    let config: PrecisionConfig =
        toml::from_str(&toml_content).expect("Failed to parse config/precisions.toml");

    for def in &config.precision {
        assert!(
            def.scale > 0 && 10i64.pow(def.scale.ilog10()) == def.scale,
            "precision {} must have a positive power-of-ten scale",
            def.name
        );
    }

    // 生成精度宏定義
    let precisions_macro = generate_precisions_macro(&config.precision);

    // 寫入到輸出目錄
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("precisions_generated.rs");

    fs::write(&dest_path, precisions_macro.to_string())
        .expect("Failed to write generated precision code");
}

fn generate_precisions_macro(precisions: &[PrecisionDef]) -> TokenStream {
    // 為每個精度生成 token
    let precision_entries: Vec<TokenStream> = precisions
        .iter()
        .map(|def| {
            let enum_name = syn::Ident::new(&def.enum_name, proc_macro2::Span::call_site());
            let name = &def.name;
            let display_name = &def.display_name;
            let scale = def.scale;

            quote! {
                (#enum_name, #name, #display_name, #scale)
            }
        })
        .collect();

    // 生成完整的宏定義
    quote! {
        /// 主精度定義宏 - 包含所有精度的元數據
        /// 這是 Precision 枚舉的唯一數據源
        macro_rules! precisions {
            ($call:ident) => {
                $call! {
                    #(#precision_entries),*
                }
            };
        }
    }
}
