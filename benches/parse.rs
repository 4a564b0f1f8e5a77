use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dexcore::dex::header::HEADER_SIZE;
use dexcore::dex::DexFile;

/// Builds a small but non-trivial in-memory DEX image: one string, one
/// type, one prototype, one field, one method with a tiny instruction
/// stream, and one class referencing all of the above. Construction itself
/// is timed alongside parsing so the cost of assembling a realistic image
/// isn't hidden behind `include_bytes!` of a fixture on disk.
fn synthetic_dex() -> Vec<u8> {
    let mut data = vec![0u8; HEADER_SIZE];
    data[0..8].copy_from_slice(b"dex\n035\0");
    data[40..44].copy_from_slice(&0x1234_5678u32.to_le_bytes());

    let string_ids_off = data.len() as u32;
    data.extend_from_slice(&0u32.to_le_bytes());
    let string_data_off = data.len() as u32;
    data.push(4);
    data.extend_from_slice(b"Main");
    data.push(0);
    data[string_ids_off as usize..string_ids_off as usize + 4].copy_from_slice(&string_data_off.to_le_bytes());

    let type_ids_off = data.len() as u32;
    data.extend_from_slice(&0u32.to_le_bytes());

    let proto_ids_off = data.len() as u32;
    data.extend_from_slice(&0u32.to_le_bytes()); // shorty_idx
    data.extend_from_slice(&0u32.to_le_bytes()); // return_type_idx
    data.extend_from_slice(&u32::MAX.to_le_bytes()); // parameters_off (none)

    let field_ids_off = data.len() as u32;
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());

    let method_ids_off = data.len() as u32;
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());

    // code_item: registers_size, ins_size, outs_size, tries_size (u16 x4),
    // debug_info_off (u32), insns_size (u32), then insns_size * u16 insns.
    let code_off = data.len() as u32;
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(&0u16.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&1u32.to_le_bytes());
    data.extend_from_slice(&0x000eu16.to_le_bytes()); // return-void

    let class_data_off = data.len() as u32;
    data.push(0); // static fields
    data.push(0); // instance fields
    data.push(1); // direct methods
    data.push(0); // virtual methods
    data.push(0); // method id delta
    data.push(0x09); // access flags
    let mut v = code_off;
    loop {
        let byte = (v & 0x7f) as u8;
        v >>= 7;
        if v == 0 {
            data.push(byte);
            break;
        }
        data.push(byte | 0x80);
    }

    let class_defs_off = data.len() as u32;
    data.extend_from_slice(&0u32.to_le_bytes()); // class_idx
    data.extend_from_slice(&0x1u32.to_le_bytes()); // access_flags
    data.extend_from_slice(&u32::MAX.to_le_bytes()); // superclass_idx
    data.extend_from_slice(&u32::MAX.to_le_bytes()); // interfaces_off
    data.extend_from_slice(&u32::MAX.to_le_bytes()); // source_file_idx
    data.extend_from_slice(&u32::MAX.to_le_bytes()); // annotations_off
    data.extend_from_slice(&class_data_off.to_le_bytes());
    data.extend_from_slice(&u32::MAX.to_le_bytes()); // static_values_off

    let map_off = data.len() as u32;
    data.extend_from_slice(&0u32.to_le_bytes()); // map list size = 0

    data[32..36].copy_from_slice(&(data.len() as u32).to_le_bytes());
    data[36..40].copy_from_slice(&(HEADER_SIZE as u32).to_le_bytes());
    data[52..56].copy_from_slice(&map_off.to_le_bytes());
    data[56..60].copy_from_slice(&1u32.to_le_bytes());
    data[60..64].copy_from_slice(&string_ids_off.to_le_bytes());
    data[64..68].copy_from_slice(&1u32.to_le_bytes());
    data[68..72].copy_from_slice(&type_ids_off.to_le_bytes());
    data[72..76].copy_from_slice(&1u32.to_le_bytes());
    data[76..80].copy_from_slice(&proto_ids_off.to_le_bytes());
    data[80..84].copy_from_slice(&1u32.to_le_bytes());
    data[84..88].copy_from_slice(&field_ids_off.to_le_bytes());
    data[88..92].copy_from_slice(&1u32.to_le_bytes());
    data[92..96].copy_from_slice(&method_ids_off.to_le_bytes());
    data[96..100].copy_from_slice(&1u32.to_le_bytes());
    data[100..104].copy_from_slice(&class_defs_off.to_le_bytes());

    data
}

fn construct_and_open(c: &mut Criterion) {
    c.bench_function("construct_and_open", |b| {
        b.iter(|| {
            let data = synthetic_dex();
            let dex = DexFile::open(black_box(data)).unwrap();
            black_box(dex.class_count());
        })
    });
}

fn open_only(c: &mut Criterion) {
    let data = synthetic_dex();
    c.bench_function("open_only", |b| {
        b.iter(|| {
            let dex = DexFile::open(black_box(data.clone())).unwrap();
            black_box(dex.class_count());
        })
    });
}

fn walk_classes_and_methods(c: &mut Criterion) {
    let data = synthetic_dex();
    let dex = DexFile::open(data).unwrap();
    c.bench_function("walk_classes_and_methods", |b| {
        b.iter(|| {
            for class in dex.iter_classes() {
                let class = class.unwrap();
                black_box(class.name().unwrap());
                for method in class.direct_methods().unwrap() {
                    black_box(method.name().unwrap());
                }
            }
        })
    });
}

fn decode_strings(c: &mut Criterion) {
    let data = synthetic_dex();
    let dex = DexFile::open(data).unwrap();
    c.bench_function("decode_strings", |b| {
        b.iter(|| {
            for s in dex.iter_strings() {
                black_box(s.unwrap());
            }
        })
    });
}

criterion_group!(benches, construct_and_open, open_only, walk_classes_and_methods, decode_strings);
criterion_main!(benches);
