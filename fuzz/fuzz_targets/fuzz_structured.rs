#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::{arbitrary, fuzz_target};
use unstringify::{Value, unstringify, unstringify_in_place};

const MAX_DEPTH: usize = 8;
const MAX_ARRAY_SIZE: usize = 20;
const MAX_OBJECT_SIZE: usize = 20;

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

impl FuzzValue {
    fn to_value(&self, u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
        if depth >= MAX_DEPTH {
            return Ok(Value::Null);
        }

        Ok(match self.choice % 10 {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => Value::from(u.arbitrary::<i64>()?),
            3 => {
                // numeric-looking strings, decimal or hex
                let n: u128 = u.arbitrary()?;
                if u.arbitrary()? {
                    Value::String(format!("0x{:x}", n))
                } else {
                    Value::String(n.to_string())
                }
            }
            4 => {
                let s: String = u.arbitrary()?;
                Value::String(s)
            }
            5..=7 => {
                let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                let mut arr = Vec::with_capacity(size);
                for _ in 0..size {
                    let fv: FuzzValue = u.arbitrary()?;
                    arr.push(fv.to_value(u, depth + 1)?);
                }
                Value::Array(arr)
            }
            _ => {
                let size = u.int_in_range(0..=MAX_OBJECT_SIZE)?;
                let mut obj = Vec::with_capacity(size);
                for _ in 0..size {
                    let key: String = u.arbitrary()?;
                    let fv: FuzzValue = u.arbitrary()?;
                    obj.push((key, fv.to_value(u, depth + 1)?));
                }
                Value::Object(obj)
            }
        })
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);

    if let Ok(fv) = u.arbitrary::<FuzzValue>() {
        if let Ok(value) = fv.to_value(&mut u, 0) {
            let recursive = unstringify(&value);
            let mut in_place = value.clone();
            unstringify_in_place(&mut in_place);

            if recursive != in_place {
                panic!("In-place and recursive disagree!\nInput: {:?}", value);
            }
            if !recursive.same_shape(&value) {
                panic!("Shape changed!\nInput: {:?}\nOutput: {:?}", value, recursive);
            }
            if unstringify(&recursive) != recursive {
                panic!("Not idempotent!\nInput: {:?}", value);
            }
        }
    }
});
