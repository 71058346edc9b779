//! Pre-authored response text returned by the mock model. The blocks are
//! fixed; the helper functions interpolate caller-supplied text verbatim.

pub const CPP_HELLO_WORLD: &str = r#"#include <iostream>

int main() {
    std::cout << "Hello, World!" << std::endl;
    return 0;
}"#;

pub const CPP_CLASS_TEMPLATE: &str = r#"#include <iostream>
#include <string>

class MyClass {
private:
    std::string name;
    int value;

public:
    MyClass(const std::string& n, int v) : name(n), value(v) {}

    void display() const {
        std::cout << "Name: " << name << ", Value: " << value << std::endl;
    }

    // Getters and setters
    const std::string& getName() const { return name; }
    int getValue() const { return value; }
    void setValue(int v) { value = v; }
};

int main() {
    MyClass obj("Example", 42);
    obj.display();
    return 0;
}"#;

pub const PYTHON_HELLO_WORLD: &str = r#"print("Hello, World!")"#;

pub fn cpp_stub(prompt: &str) -> String {
    format!(
        r#"// Generated C++ code for: {prompt}
#include <iostream>

int main() {{
    // TODO: Implement {prompt}
    std::cout << "Implementation needed" << std::endl;
    return 0;
}}"#
    )
}

pub fn python_stub(prompt: &str) -> String {
    format!(
        r#"# Generated Python code for: {prompt}

def main():
    # TODO: Implement {prompt}
    print("Implementation needed")

if __name__ == "__main__":
    main()"#
    )
}

pub fn generic_stub(language: &str, prompt: &str) -> String {
    format!("// Generated {language} code for: {prompt}\n// TODO: Implement functionality")
}

pub fn generation_note(prompt: &str) -> String {
    format!(
        "This code was generated based on your prompt: '{prompt}'. It provides a basic structure that you can extend and modify as needed."
    )
}

pub fn cpp_walkthrough(line_count: usize) -> String {
    format!(
        r#"This C++ code contains {line_count} lines. Here's what it does:

1. **Headers**: The code includes necessary header files for input/output operations
2. **Main Function**: The entry point of the program where execution begins
3. **Logic**: The core functionality is implemented within the main function
4. **Return Statement**: The program returns 0 to indicate successful execution

**Key C++ Concepts Used:**
- Standard library usage
- Function definitions
- Variable declarations
- Control flow structures"#
    )
}

pub fn cpp_suggestions() -> Vec<String> {
    vec![
        "Consider adding error handling for robustness".to_string(),
        "Add comments to explain complex logic".to_string(),
        "Use const correctness where applicable".to_string(),
        "Consider using modern C++ features (C++11/14/17/20)".to_string(),
        "Add input validation for user inputs".to_string(),
    ]
}

pub fn python_walkthrough(line_count: usize) -> String {
    format!(
        r#"This Python code contains {line_count} lines. Here's the analysis:

1. **Structure**: The code follows Python conventions and syntax
2. **Functionality**: Implements the core logic using Python's built-in features
3. **Style**: Uses Python's readable and concise syntax

**Python Features Used:**
- Built-in functions and methods
- Python data structures
- Control flow statements
- Function definitions"#
    )
}

pub fn python_suggestions() -> Vec<String> {
    vec![
        "Add type hints for better code documentation".to_string(),
        "Use docstrings to document functions".to_string(),
        "Consider using list comprehensions where appropriate".to_string(),
        "Add error handling with try-except blocks".to_string(),
        "Follow PEP 8 style guidelines".to_string(),
    ]
}

pub fn generic_walkthrough(language: &str, line_count: usize) -> String {
    format!(
        "This {language} code contains {line_count} lines. The code structure appears to follow standard conventions for the language."
    )
}

pub fn generic_suggestions() -> Vec<String> {
    vec![
        "Add appropriate comments".to_string(),
        "Consider code organization".to_string(),
        "Add error handling".to_string(),
    ]
}

pub const CHAT_GREETING: &str = "Hello! I'm BAGEL, your AI programming assistant. I can help you with code generation, explanation, debugging, and general programming questions. How can I assist you today?";

pub const CHAT_CPP_OVERVIEW: &str = r#"C++ is a powerful, general-purpose programming language. Here are some key points:

**Strengths:**
- High performance and efficiency
- Object-oriented programming support
- Rich standard library
- Memory management control
- Wide industry adoption

**Learning Path:**
1. Start with basic syntax and data types
2. Learn about functions and control structures
3. Master object-oriented concepts (classes, inheritance, polymorphism)
4. Understand memory management (pointers, references)
5. Explore STL (Standard Template Library)
6. Practice with real projects

**Best Practices:**
- Use RAII (Resource Acquisition Is Initialization)
- Prefer smart pointers over raw pointers
- Follow const correctness
- Use modern C++ features (C++11 and later)

Would you like me to help you with any specific C++ topic?"#;

pub const CHAT_PYTHON_OVERVIEW: &str = r#"Python is an excellent language for beginners and professionals alike:

**Why Python:**
- Easy to learn and read
- Extensive libraries and frameworks
- Great for data science, web development, automation
- Strong community support

**Learning Resources:**
- Official Python tutorial
- Practice on coding platforms
- Build real projects
- Join Python communities

**Key Libraries:**
- NumPy/Pandas for data analysis
- Django/Flask for web development
- TensorFlow/PyTorch for machine learning
- Requests for HTTP operations

What specific Python topic interests you?"#;

pub const CHAT_CAPABILITIES: &str = r#"I can assist you with various programming tasks:

🔧 **Code Generation**: Create code from natural language descriptions
📖 **Code Explanation**: Analyze and explain existing code
🎨 **Image Generation**: Create images from text descriptions
💬 **Programming Chat**: Answer questions about programming concepts
🐛 **Debugging Help**: Assist with troubleshooting code issues
📚 **Learning Guidance**: Provide learning resources and best practices

**Supported Languages:**
- C++ (primary focus)
- Python
- JavaScript
- And more!

Just ask me anything programming-related, and I'll do my best to help!"#;

pub const CHAT_DEBUGGING: &str = r#"I'd be happy to help you debug your code! Here's how I can assist:

**Debugging Process:**
1. **Share your code** - Paste the problematic code
2. **Describe the issue** - What error are you getting?
3. **Expected vs Actual** - What should happen vs what's happening?

**Common C++ Issues:**
- Segmentation faults (memory access errors)
- Compilation errors (syntax, missing headers)
- Logic errors (incorrect algorithm)
- Memory leaks (improper memory management)

**Debugging Tips:**
- Use a debugger (GDB, Visual Studio debugger)
- Add print statements to trace execution
- Check variable values at different points
- Validate input data
- Review error messages carefully

Please share your code and describe the specific problem you're facing!"#;

pub fn chat_fallback(message: &str) -> String {
    format!(
        r#"I understand you're asking about: "{message}"

As your AI programming assistant, I'm here to help with:
- Code generation and explanation
- Programming concepts and best practices
- Debugging and troubleshooting
- Learning resources and guidance
- Technical questions

Could you provide more specific details about what you'd like help with? For example:
- What programming language are you working with?
- What specific problem are you trying to solve?
- Do you have any code you'd like me to review?

I'm ready to assist you with your programming journey!"#
    )
}
