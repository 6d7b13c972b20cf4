use std::fs;
use std::io;
use std::io::Read;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use clap::arg;
use clap::command;

use rsarv::Digestable;

fn main() -> Result<()> {
    let matches = command!()
        .about("check an RSASSA-PKCS1-v1_5 signature over a file")
        .arg(arg!(-n --modulus <HEX> "public modulus").required(true))
        .arg(arg!(-e --exponent <HEX> "public exponent").required(true))
        .arg(arg!(-s --signature <HEX> "signature to check").required(true))
        .arg(arg!(-a --algo <NAME> "digest algorithm: sha1, sha256, sha512").default_value("sha256"))
        .arg(arg!([FILE] "signed file, stdin when absent"))
        .get_matches();

    let n = hex::decode(matches.get_one::<String>("modulus").unwrap())
        .context("decoding modulus")?;
    let e = hex::decode(matches.get_one::<String>("exponent").unwrap())
        .context("decoding exponent")?;
    let s = hex::decode(matches.get_one::<String>("signature").unwrap())
        .context("decoding signature")?;

    if n.iter().all(|&b| 0 == b) {
        bail!("modulus must be nonzero");
    }

    let mut digest = match matches.get_one::<String>("algo").unwrap().as_str() {
        "sha1" => Digestable::sha1(),
        "sha256" => Digestable::sha256(),
        "sha512" => Digestable::sha512(),
        other => bail!("unsupported digest algorithm: {other:?}"),
    };

    let mut buf = Vec::new();
    match matches.get_one::<String>("FILE") {
        Some(path) => {
            fs::File::open(path)
                .with_context(|| format!("opening {path:?}"))?
                .read_to_end(&mut buf)
                .with_context(|| format!("reading {path:?}"))?;
        }
        None => {
            io::stdin().read_to_end(&mut buf).context("reading stdin")?;
        }
    }
    digest.process(&buf);

    let factor = rsarv::barrett_factor(&n);
    rsarv::pkcs1_v15_verify(&digest.digest_info(), &s, &n, &e, &factor)
        .context("verifying signature")?;

    println!("good signature");
    Ok(())
}
