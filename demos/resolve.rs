use uri_resolution::{error::PathError, Authority, PathSegments, Resolver, UriComponents};

fn main() -> Result<(), PathError> {
    let base = UriComponents::new(
        Some("http"),
        Some(Authority::new("example.com").with_userinfo("hello").with_port("2333")),
        PathSegments::new(["", "what", "is", "this"], true)?,
        Some("k=v"),
        None,
    )?;
    println!("{base}");
    println!("{base:#?}");

    let Some(resolver) = Resolver::with_base(base) else {
        unreachable!("base has a scheme");
    };

    let paths: [&[&str]; 4] = [&["..", "that"], &["", "root"], &["."], &[""]];
    for path in paths {
        let r = UriComponents::new(
            None,
            None,
            PathSegments::verbatim(path.iter().copied(), false)?,
            None,
            Some("title1"),
        )?;
        let target = resolver.resolve(&r);
        println!("{r} -> {target}");
        println!("{target:#?}");
    }
    Ok(())
}
