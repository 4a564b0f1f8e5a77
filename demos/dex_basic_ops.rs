#![allow(unused)]

use dexcore::dex::{DexContainer, DexFile};
use dexcore::Result;

fn dex_get_method<C: DexContainer>(dex: &DexFile<C>) -> Result<()> {
    // there's no single call that returns everything about a method at
    // once; resolve the handle, then pull whatever you need off it
    let method = dex.get_method(0, None)?;

    // name and declaring class are both resolved through the handle,
    // not by hand-walking the string/type pools yourself
    let name = method.name()?;
    let class_name = method.defining_class_name()?;

    // prototypes are resolved lazily too, one call away from the method
    let proto = method.prototype()?;
    let return_type = proto.return_type_name()?;

    // a method with no code (abstract, native, or resolved without a
    // class-data code offset) just reports code() as None
    if let Some(code) = method.code() {
        let _ = code.insns_size;
    }

    // every method id is exposed, so you can walk all of them
    for method in dex.iter_methods() {
        let method = method?;
        let _ = method.name()?;
    }

    // NOTE: method_count() is the number given in the file header; it
    // matches iter_methods().count() for a well-formed image, but nothing
    // stops an id from pointing past it if you resolve it by hand
    assert_eq!(dex.method_count() as usize, dex.iter_methods().count());
    Ok(())
}

fn dex_get_field<C: DexContainer>(dex: &DexFile<C>) -> Result<()> {
    // the interface for fields mirrors the one for methods
    let field = dex.get_field(0)?;

    let name = field.name()?;
    let type_name = field.type_name()?;
    let class_name = field.defining_class_name()?;

    // all field ids are exposed, so you can iterate over them
    for field in dex.iter_fields() {
        let field = field?;
        let _ = field.name()?;
    }
    Ok(())
}

fn dex_types<C: DexContainer>(dex: &DexFile<C>) -> Result<()> {
    // types are somewhat different from methods and fields: they're just
    // a descriptor string id, resolved in one step
    let name = dex.get_type_name(0)?;

    // see dex_strings.rs for more on how MUTF-8 decoding itself works
    for name in dex.iter_type_names() {
        let _ = name?;
    }
    Ok(())
}

fn dex_classes<C: DexContainer>(dex: &DexFile<C>) -> Result<()> {
    // a class def ties together a type, its superclass, interfaces, and
    // the class-data item describing its fields and methods
    for class in dex.iter_classes() {
        let class = class?;
        let name = class.name()?;
        let superclass = class.superclass_name()?;

        for field in class.static_fields()? {
            let _ = field.name()?;
        }
        for method in class.direct_methods()? {
            let _ = method.name()?;
        }
    }
    Ok(())
}

fn main() {
    // ...
}
