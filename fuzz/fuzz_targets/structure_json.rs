#![no_main]

use libfuzzer_sys::fuzz_target;

use ethereum_rpc_schema as s;

fn check<T: s::Structure + PartialEq + std::fmt::Debug>(value: &s::Value) {
    let Ok(out) = s::structure::<T>(value) else {
        return;
    };

    let json = s::unstructure(&out);

    assert_eq!(s::structure::<T>(&json).unwrap(), out);
}

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<s::Value>(data) else {
        return;
    };

    check::<s::BlockInfo>(&value);
    check::<s::TxReceipt>(&value);
    check::<s::LogEntry>(&value);
    check::<s::FilterParams>(&value);
    check::<s::Type2Transaction>(&value);
    check::<s::RpcError>(&value);
});
