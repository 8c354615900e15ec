use iotx_address::{Address, AddressError, Network};

fn main() {
    let network = Network::from_env();
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "io1djlzhwxdqqahhwhdxtn9hkhppvnnrptqtwf2h5".to_string());

    let addr = match Address::from_string(&input, network) {
        Ok(addr) => addr,
        Err(AddressError::InvalidLength(len)) => {
            eprintln!("Bad address length: {len}");
            std::process::exit(1);
        }
        Err(AddressError::PrefixMismatch { hrp, prefix }) => {
            eprintln!("Address is for another network: hrp {hrp}, expected {prefix}");
            std::process::exit(1);
        }
        Err(AddressError::Bech32(e)) => {
            eprintln!("Bech32 decoding error: {e}");
            std::process::exit(1);
        }
        Err(AddressError::Hex(e)) => {
            eprintln!("Hex decoding error: {e}");
            std::process::exit(1);
        }
    };

    println!("Network     : {network:?}");
    println!("Address     : {}", addr.encode(network));
    if addr.is_special() {
        println!("Special     : yes (no binary payload)");
    } else {
        println!("Payload hex : {}", addr.hex());
    }
}
