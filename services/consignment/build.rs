use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    let protoc = protoc_bin_vendored::protoc_bin_path()?;
    unsafe {
        env::set_var("PROTOC", protoc);
    }

    // 清单文件直接反序列化为 Consignment，缺省字段取默认值
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .type_attribute(".", "#[derive(serde::Serialize, serde::Deserialize)]")
        .type_attribute(".", "#[serde(default)]")
        .file_descriptor_set_path(out_dir.join("consignment_descriptor.bin"))
        .compile_protos(
            &["../../proto/shipping/consignment/v1/consignment.proto"],
            &["../../proto"],
        )?;

    Ok(())
}
