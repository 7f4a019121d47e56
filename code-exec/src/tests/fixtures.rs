/// Source snippets submitted in tests
pub mod code_samples {
    pub const PYTHON_HELLO: &str = r#"print("Hello, World!")"#;
    pub const JAVA_FOO: &str = "public class Foo { public static void main(String[] a){} }";
    pub const JAVA_SCANNER: &str = r#"import java.util.Scanner;

public class Solution {
    public static void main(String[] args) {
        Scanner sc = new Scanner(System.in);
        int a = sc.nextInt();
        int b = sc.nextInt();
        System.out.println(a + b);
    }
}"#;
    pub const CPP_BROKEN: &str = r#"
        #include <iostream>
        int main() {
            std::cout << "missing semicolon" << std::endl
        }
    "#;
}

/// Bodies returned by the stubbed remote service
pub mod remote_responses {
    use serde_json::{json, Value};

    pub fn run_only(code: i64, stdout: &str, stderr: &str) -> Value {
        json!({
            "language": "python",
            "version": "3.10.0",
            "run": {
                "stdout": stdout,
                "stderr": stderr,
                "code": code,
                "signal": null,
                "output": format!("{}{}", stdout, stderr)
            }
        })
    }

    pub fn compile_failure(stderr: &str) -> Value {
        json!({
            "language": "cpp",
            "version": "10.2.0",
            "compile": {
                "stdout": "",
                "stderr": stderr,
                "code": 1,
                "signal": null,
                "output": stderr
            },
            "run": {
                "stdout": "",
                "stderr": "",
                "code": null,
                "signal": null,
                "output": ""
            }
        })
    }

    pub const JAVA_NO_SUCH_ELEMENT: &str = "Exception in thread \"main\" java.util.NoSuchElementException\n\tat java.base/java.util.Scanner.throwFor(Scanner.java:937)\n\tat java.base/java.util.Scanner.nextInt(Scanner.java:2258)\n\tat Main.main(main.java:6)\n";
    pub const JAVA_INPUT_MISMATCH: &str = "Exception in thread \"main\" java.util.InputMismatchException\n\tat java.base/java.util.Scanner.throwFor(Scanner.java:939)\n\tat Main.main(main.java:6)\n";
}
